mod file_sink;

pub use file_sink::FileSink;

use crate::error::Result;
use image::RgbImage;
use std::path::Path;

/// Trait for output destinations
pub trait ImageSink {
    /// Encode and write the finished image
    fn save(&self, image: &RgbImage) -> Result<()>;

    /// Where the image goes, for logging
    fn location(&self) -> &Path;
}
