//! Edge-weight models built on the horizontal Sobel derivative.
//!
//! Both models run the same shaping: `|gx|` → min-max normalize → gamma.
//! They differ only in which intensity plane the derivative sees.
use super::gradient::{horizontal_sobel, magnitude};
use super::gray::{channel_plane, gray_plane, to_gray};
use super::normalize::{apply_gamma, normalize_min_max};
use super::types::{EdgeWeightModel, WeightMap};
use image::{GrayImage, RgbImage};
use ndarray::Array2;

/// Normalize a gradient magnitude map and apply `gamma`
pub fn shape_weight(magnitude: &Array2<f32>, gamma: f32) -> WeightMap {
    let _span = tracing::debug_span!("shape_weight", gamma).entered();
    apply_gamma(&normalize_min_max(magnitude), gamma)
}

/// Edge weight from a grayscale image
pub fn build_edge_weight(gray: &GrayImage, gamma: f32) -> WeightMap {
    let gx = horizontal_sobel(&gray_plane(gray));
    shape_weight(&magnitude(&gx), gamma)
}

/// Derivative on the BT.601 luma image
#[derive(Debug, Default, Clone, Copy)]
pub struct LumaSobel;

impl EdgeWeightModel for LumaSobel {
    fn weight(&self, frame: &RgbImage, gamma: f32) -> WeightMap {
        let _span = tracing::debug_span!("luma_sobel").entered();
        build_edge_weight(&to_gray(frame), gamma)
    }

    fn name(&self) -> &'static str {
        "luma"
    }
}

/// Derivative on each colour channel, magnitudes averaged
///
/// Picks up edges between regions of equal luma but different hue.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChannelMeanSobel;

impl EdgeWeightModel for ChannelMeanSobel {
    fn weight(&self, frame: &RgbImage, gamma: f32) -> WeightMap {
        let _span = tracing::debug_span!("channel_mean_sobel").entered();

        let (width, height) = frame.dimensions();
        let mut sum = Array2::<f32>::zeros((height as usize, width as usize));
        for channel in 0..3 {
            sum += &magnitude(&horizontal_sobel(&channel_plane(frame, channel)));
        }
        let mean = sum / 3.0;

        shape_weight(&mean, gamma)
    }

    fn name(&self) -> &'static str {
        "channel-mean"
    }
}
