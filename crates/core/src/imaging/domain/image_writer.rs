use std::path::Path;

use image::RgbImage;

use crate::shared::error::PipelineError;

/// Writes an image to a file, replacing any existing file at `path`.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &RgbImage) -> Result<(), PipelineError>;
}
