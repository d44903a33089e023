use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::error::PipelineError;

/// Writes images with the `image` crate, choosing the format from the
/// file extension.
///
/// The image is encoded into a temporary file next to the destination and
/// renamed into place, so a failed encode never leaves a partial file.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), PipelineError> {
        let format = ImageFormat::from_path(path).map_err(|source| PipelineError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|source| PipelineError::OutputDir {
            path: dir.clone(),
            source,
        })?;

        let staged = tempfile::Builder::new()
            .prefix(".dicepips-")
            .tempfile_in(&dir)
            .map_err(|source| PipelineError::Persist {
                path: path.to_path_buf(),
                source,
            })?;

        image
            .save_with_format(staged.path(), format)
            .map_err(|source| PipelineError::Encode {
                path: path.to_path_buf(),
                source,
            })?;

        staged.persist(path).map_err(|e| PipelineError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(width: u32, height: u32) -> RgbImage {
        RgbImage::from_pixel(width, height, Rgb([50, 100, 200]))
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new().write(&path, &solid(100, 80)).unwrap();
        assert!(path.exists());
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        ImageFileWriter::new().write(&path, &solid(50, 50)).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(0, 0).0, [50, 100, 200]);
    }

    #[test]
    fn test_creates_missing_output_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("out.png");
        ImageFileWriter::new().write(&path, &solid(10, 10)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let writer = ImageFileWriter::new();
        writer.write(&path, &solid(10, 10)).unwrap();
        writer.write(&path, &solid(20, 30)).unwrap();
        assert_eq!(image::open(&path).unwrap().width(), 20);
    }

    #[test]
    fn test_unknown_extension_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.unknownext");
        let result = ImageFileWriter::new().write(&path, &solid(10, 10));
        assert!(matches!(result, Err(PipelineError::Encode { .. })));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
