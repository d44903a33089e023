use image::RgbImage;

use crate::annotation::domain::annotations::DrawCommand;

/// Applies draw commands to a copy of an image; the source is left untouched.
pub trait AnnotationRenderer: Send {
    fn render(&self, image: &RgbImage, commands: &[DrawCommand]) -> RgbImage;
}
