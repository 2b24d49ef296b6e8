//! Heavy median blur of the colour image.
//!
//! Median rather than box/Gaussian: it wipes out fine texture and noise
//! but keeps large flat colour regions without ringing or halos.
use crate::error::{PipelineError, Result};
use image::RgbImage;
use imageproc::filter::median_filter;

/// Reject apertures that have no centre pixel
pub fn check_aperture(aperture: u32) -> Result<()> {
    if aperture == 0 || aperture % 2 == 0 {
        return Err(PipelineError::InvalidAperture(aperture));
    }
    Ok(())
}

/// Per-channel median over an `aperture × aperture` window
///
/// Output has the same dimensions as `image`.
pub fn median_blur(image: &RgbImage, aperture: u32) -> Result<RgbImage> {
    let _span = tracing::debug_span!("median_blur", aperture).entered();

    check_aperture(aperture)?;
    let radius = aperture / 2;
    Ok(median_filter(image, radius, radius))
}
