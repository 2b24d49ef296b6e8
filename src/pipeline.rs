//! The five pipeline stages wired together for one frame.
use crate::composite::composite;
use crate::config::SmoothingConfig;
use crate::edges::{EdgeWeightModel, WeightMap};
use crate::error::Result;
use crate::smooth::median_blur;
use image::RgbImage;
use std::time::{Duration, Instant};

/// Everything produced for one input frame
pub struct Smoothed {
    pub weight: WeightMap,
    pub output: RgbImage,
    pub timings: StageTimings,
}

/// Wall time spent in each stage
#[derive(Debug, Default, Clone, Copy)]
pub struct StageTimings {
    pub edges: Duration,
    pub blur: Duration,
    pub composite: Duration,
}

/// Edge-aware smoothing of `frame`
///
/// Steps:
/// 1. Build the edge weight map with `model`
/// 2. Median blur the frame with `config.aperture`
/// 3. Blend frame and blur using the weight map
pub fn smooth_edges(
    frame: &RgbImage,
    model: &dyn EdgeWeightModel,
    config: &SmoothingConfig,
) -> Result<Smoothed> {
    let _span = tracing::debug_span!("smooth_edges", model = model.name()).entered();
    config.validate()?;

    let start = Instant::now();
    let weight = model.weight(frame, config.gamma);
    let edges = start.elapsed();

    let start = Instant::now();
    let blurred = median_blur(frame, config.aperture)?;
    let blur = start.elapsed();

    let start = Instant::now();
    let output = composite(frame, &blurred, &weight)?;
    let composite = start.elapsed();

    Ok(Smoothed {
        weight,
        output,
        timings: StageTimings {
            edges,
            blur,
            composite,
        },
    })
}
