mod file_source;

pub use file_source::FileSource;

use crate::error::Result;
use image::RgbImage;
use std::path::Path;

/// Trait for image sources
pub trait ImageSource {
    /// Decode the image into 8-bit RGB
    fn load(&self) -> Result<RgbImage>;

    /// Where the image comes from, for logging
    fn location(&self) -> &Path;
}
