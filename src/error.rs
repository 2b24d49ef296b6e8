use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the smoothing pipeline stages
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source image missing, unreadable or in an unsupported format
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Destination could not be written
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Two images that must line up have different dimensions (width, height)
    #[error("shape mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    ShapeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Median aperture must be odd and at least 1
    #[error("invalid median aperture {0}: must be odd and >= 1")]
    InvalidAperture(u32),

    /// Gamma must be finite and positive to keep weights in [0, 1]
    #[error("invalid gamma {0}: must be finite and > 0")]
    InvalidGamma(f32),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
