use std::path::Path;

use image::RgbImage;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::PipelineError;

/// Decodes image files with the `image` crate.
///
/// The decoder already yields RGB channel order; alpha and higher bit depths
/// are flattened to 8-bit RGB.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<RgbImage, PipelineError> {
        let decoded = image::open(path).map_err(|source| PipelineError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(decoded.to_rgb8())
    }
}
