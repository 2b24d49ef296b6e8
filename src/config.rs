use crate::error::{PipelineError, Result};
use crate::smooth::check_aperture;

/// Median blur window size used when nothing else is configured
pub const DEFAULT_APERTURE: u32 = 21;

/// Gamma applied to the normalized gradient map
pub const DEFAULT_GAMMA: f32 = 0.25;

/// Fixed numeric parameters of the smoothing pipeline
///
/// `gamma` is the one knob that controls how wide the "edge" band is:
/// the normalized gradient is raised to this power, so values below 1.0
/// lift weak gradients towards 1.0 and keep more of the image sharp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingConfig {
    /// Side length of the square median window (odd)
    pub aperture: u32,
    /// Exponent applied to the normalized edge map
    pub gamma: f32,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            aperture: DEFAULT_APERTURE,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl SmoothingConfig {
    /// Check aperture and gamma before any pixel work starts
    ///
    /// A zero gamma turns flat regions into full weight (0^0 = 1), a
    /// negative one sends them to infinity.
    pub fn validate(&self) -> Result<()> {
        check_aperture(self.aperture)?;
        if !(self.gamma.is_finite() && self.gamma > 0.0) {
            return Err(PipelineError::InvalidGamma(self.gamma));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = SmoothingConfig::default();
        assert_eq!(config.aperture, 21);
        assert_eq!(config.gamma, 0.25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn even_or_zero_aperture_is_rejected() {
        for aperture in [0, 2, 20] {
            let config = SmoothingConfig {
                aperture,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(PipelineError::InvalidAperture(a)) if a == aperture
            ));
        }
    }

    #[test]
    fn non_positive_or_non_finite_gamma_is_rejected() {
        for gamma in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = SmoothingConfig {
                gamma,
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(PipelineError::InvalidGamma(_))),
                "gamma {gamma} accepted"
            );
        }
    }

    #[test]
    fn small_positive_gamma_is_accepted() {
        let config = SmoothingConfig {
            gamma: 0.01,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
