use image::GrayImage;

use crate::detection::domain::pip_counter::PipCounter;
use crate::detection::infrastructure::blob_detector::{BlobDetector, BlobParams, Bounds};
use crate::detection::infrastructure::roi::extract_roi;
use crate::shared::die_candidate::DieCandidate;

pub const MIN_PIP_CIRCULARITY: f64 = 0.5;
pub const MIN_PIP_INERTIA_RATIO: f64 = 0.75;

/// Blob parameters tuned for round, dark pips on a light face.
pub fn pip_blob_params() -> BlobParams {
    BlobParams {
        circularity: Some(Bounds::at_least(MIN_PIP_CIRCULARITY)),
        inertia_ratio: Some(Bounds::at_least(MIN_PIP_INERTIA_RATIO)),
        ..BlobParams::default()
    }
}

/// Counts pips as blobs inside the die's axis-aligned box.
pub struct BlobPipCounter {
    detector: BlobDetector,
}

impl BlobPipCounter {
    pub fn new() -> Self {
        Self::with_params(pip_blob_params())
    }

    pub fn with_params(params: BlobParams) -> Self {
        Self {
            detector: BlobDetector::new(params),
        }
    }
}

impl Default for BlobPipCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl PipCounter for BlobPipCounter {
    fn count(&self, gray: &GrayImage, die: &DieCandidate) -> usize {
        let center = (die.center.0 as f64, die.center.1 as f64);
        let roi = extract_roi(gray, center, (die.width, die.height));
        self.detector.detect(&roi).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::grayscale::to_grayscale;
    use crate::shared::test_images::{black_canvas, draw_die, DIE_SIDE};
    use imageproc::point::Point;
    use rstest::rstest;

    fn die_at(x: i32, y: i32) -> DieCandidate {
        let side = DIE_SIDE as i32 - 1;
        DieCandidate {
            boundary: vec![
                Point::new(x, y),
                Point::new(x + side, y),
                Point::new(x + side, y + side),
                Point::new(x, y + side),
            ],
            area: (side * side) as f64,
            center: (x + side / 2, y + side / 2),
            width: side as u32,
            height: side as u32,
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    fn test_counts_standard_faces(#[case] pips: usize) {
        let mut image = black_canvas(250, 250);
        draw_die(&mut image, 50, 50, pips);
        let gray = to_grayscale(&image);
        assert_eq!(BlobPipCounter::new().count(&gray, &die_at(50, 50)), pips);
    }

    #[test]
    fn test_only_pips_inside_the_box_are_counted() {
        let mut image = black_canvas(420, 220);
        draw_die(&mut image, 20, 30, 2);
        draw_die(&mut image, 240, 30, 6);
        let gray = to_grayscale(&image);
        let counter = BlobPipCounter::new();
        assert_eq!(counter.count(&gray, &die_at(20, 30)), 2);
        assert_eq!(counter.count(&gray, &die_at(240, 30)), 6);
    }

    #[test]
    fn test_zero_sized_box_counts_nothing() {
        let image = black_canvas(50, 50);
        let gray = to_grayscale(&image);
        let mut die = die_at(0, 0);
        die.width = 0;
        assert_eq!(BlobPipCounter::new().count(&gray, &die), 0);
    }

    #[test]
    fn test_default_uses_pip_filters() {
        let params = pip_blob_params();
        assert_eq!(params.circularity, Some(Bounds::at_least(0.5)));
        assert_eq!(params.inertia_ratio, Some(Bounds::at_least(0.75)));
        assert_eq!(params.blob_color, Some(0));
    }
}
