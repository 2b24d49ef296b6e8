mod gradient;
mod gray;
mod normalize;
mod sobel;
mod types;

pub use sobel::{ChannelMeanSobel, LumaSobel};
pub use types::{EdgeWeightModel, WeightMap};

/// Which intensity plane the gradient is measured on
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EdgeSource {
    /// BT.601 luma of the frame
    #[default]
    Luma,
    /// Mean of the per-channel gradient magnitudes
    ChannelMean,
}

/// Create the edge-weight model for `source`
pub fn create_model(source: EdgeSource) -> Box<dyn EdgeWeightModel> {
    match source {
        EdgeSource::Luma => Box::new(LumaSobel),
        EdgeSource::ChannelMean => Box::new(ChannelMeanSobel),
    }
}
