use super::ImageSink;
use crate::error::{PipelineError, Result};
use image::{ImageError, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes an image file; the encoder is chosen from the extension
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn encode_error(&self, source: ImageError) -> PipelineError {
        PipelineError::Encode {
            path: self.path.clone(),
            source,
        }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| self.encode_error(ImageError::IoError(e)))?;
            }
        }
        Ok(())
    }
}

impl ImageSink for FileSink {
    fn save(&self, image: &RgbImage) -> Result<()> {
        let _span = tracing::debug_span!("encode").entered();

        self.ensure_parent_dir()?;
        image
            .save(&self.path)
            .map_err(|source| self.encode_error(source))?;

        tracing::info!(
            "Wrote {} ({}x{})",
            self.path.display(),
            image.width(),
            image.height()
        );

        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
