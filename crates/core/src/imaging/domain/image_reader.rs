use std::path::Path;

use image::RgbImage;

use crate::shared::error::PipelineError;

/// Decodes an image file into canonical RGB.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<RgbImage, PipelineError>;
}
