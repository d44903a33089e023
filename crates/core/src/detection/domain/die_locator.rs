use image::GrayImage;

use crate::shared::die_candidate::DieCandidate;
use crate::shared::error::PipelineError;

/// Domain interface for finding die faces in a grayscale image.
///
/// Candidates are returned largest first.
pub trait DieLocator: Send {
    fn locate(&self, gray: &GrayImage) -> Result<Vec<DieCandidate>, PipelineError>;
}
