use image::GrayImage;

use crate::shared::die_candidate::DieCandidate;

/// Domain interface for counting the pips on one located die.
///
/// Read-only on the image; no upper bound is enforced on the result.
pub trait PipCounter: Send {
    fn count(&self, gray: &GrayImage, die: &DieCandidate) -> usize;
}
