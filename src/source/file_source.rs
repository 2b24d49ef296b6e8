use super::ImageSource;
use crate::error::{PipelineError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Reads an image file; the format is detected by the `image` crate
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ImageSource for FileSource {
    fn load(&self) -> Result<RgbImage> {
        let _span = tracing::debug_span!("decode").entered();

        let image = image::open(&self.path)
            .map_err(|source| PipelineError::Decode {
                path: self.path.clone(),
                source,
            })?
            .into_rgb8();

        tracing::info!(
            "Loaded {} ({}x{})",
            self.path.display(),
            image.width(),
            image.height()
        );

        Ok(image)
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn missing_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("nope.png"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, PipelineError::Decode { .. }));
        assert!(err.to_string().contains("nope.png"));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            FileSource::new(&path).load(),
            Err(PipelineError::Decode { .. })
        ));
    }

    #[test]
    fn loads_rgb_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.png");
        let image = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 50, y as u8 * 90, 12]));
        image.save(&path).unwrap();

        let source = FileSource::new(&path);
        assert_eq!(source.location(), path.as_path());
        assert_eq!(source.load().unwrap(), image);
    }
}
