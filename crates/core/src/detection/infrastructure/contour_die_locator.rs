use image::GrayImage;
use imageproc::contours::{find_contours, BorderType};
use imageproc::geometry::arc_length;

use crate::detection::domain::die_locator::DieLocator;
use crate::detection::domain::grayscale::binarize_otsu;
use crate::detection::infrastructure::polygon::{
    approximate_closed_polygon, compress_straight_runs,
};
use crate::shared::constants::{APPROX_EPSILON_FRACTION, DIE_VERTEX_COUNT, MIN_DIE_AREA};
use crate::shared::die_candidate::{Boundary, DieCandidate};
use crate::shared::error::PipelineError;
use crate::shared::moments::contour_area;

#[derive(Clone, Debug, PartialEq)]
pub struct DieLocatorParams {
    /// Boundaries must enclose strictly more than this many square pixels.
    pub min_area: f64,
    /// Polygon approximation tolerance as a fraction of the perimeter.
    pub approx_epsilon_fraction: f64,
    pub vertex_count: usize,
}

impl Default for DieLocatorParams {
    fn default() -> Self {
        Self {
            min_area: MIN_DIE_AREA,
            approx_epsilon_fraction: APPROX_EPSILON_FRACTION,
            vertex_count: DIE_VERTEX_COUNT,
        }
    }
}

/// Finds dice as large, square-like outer contours of an Otsu mask.
pub struct ContourDieLocator {
    params: DieLocatorParams,
}

impl ContourDieLocator {
    pub fn new(params: DieLocatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &DieLocatorParams {
        &self.params
    }

    fn is_die_shaped(&self, boundary: &Boundary, area: f64) -> bool {
        if area <= self.params.min_area {
            return false;
        }
        let epsilon = self.params.approx_epsilon_fraction * arc_length(boundary, true);
        approximate_closed_polygon(boundary, epsilon).len() == self.params.vertex_count
    }
}

impl Default for ContourDieLocator {
    fn default() -> Self {
        Self::new(DieLocatorParams::default())
    }
}

impl DieLocator for ContourDieLocator {
    fn locate(&self, gray: &GrayImage) -> Result<Vec<DieCandidate>, PipelineError> {
        if gray.width() == 0 || gray.height() == 0 {
            return Ok(Vec::new());
        }

        let (level, binary) = binarize_otsu(gray);
        let mut boundaries: Vec<(f64, Boundary)> = external_boundaries(&binary)
            .into_iter()
            .map(|b| (contour_area(&b), b))
            .collect();
        log::debug!(
            "Otsu level {level}: {} external boundaries",
            boundaries.len()
        );

        boundaries.sort_by(|a, b| b.0.total_cmp(&a.0));

        let mut dice = Vec::new();
        for (area, boundary) in boundaries {
            if self.is_die_shaped(&boundary, area) {
                dice.push(DieCandidate::from_boundary(boundary, area)?);
            }
        }
        Ok(dice)
    }
}

/// Outermost boundaries of the foreground regions; holes and anything
/// nested inside a hole are skipped.
pub fn external_boundaries(binary: &GrayImage) -> Vec<Boundary> {
    find_contours::<i32>(binary)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| compress_straight_runs(&c.points))
        .collect()
}
