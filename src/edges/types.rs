use image::RgbImage;
use ndarray::Array2;

/// Blend weights: 0.0 = take the smoothed pixel, 1.0 = keep the original
/// Shape is (height, width) and matches the source frame
pub type WeightMap = Array2<f32>;

/// Trait for edge-weight builders
/// Allows swapping how the gradient is measured (luma, per-channel mean)
pub trait EdgeWeightModel {
    /// Build a weight map for `frame`
    ///
    /// # Arguments
    /// * `frame` - Input RGB frame
    /// * `gamma` - Exponent applied after min-max normalization
    ///
    /// # Returns
    /// * Weight map with values 0.0-1.0, same height and width as `frame`
    fn weight(&self, frame: &RgbImage, gamma: f32) -> WeightMap;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
