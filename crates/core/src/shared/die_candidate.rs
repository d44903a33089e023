use imageproc::geometry::min_area_rect;
use imageproc::point::Point;

use crate::shared::error::PipelineError;
use crate::shared::moments::Moments;

/// Closed outer boundary of a connected region, straight runs reduced to
/// their end-points.
pub type Boundary = Vec<Point<i32>>;

/// A boundary accepted as a die face.
///
/// `width`/`height` are the axis-aligned extent of the minimum-area
/// rectangle around the boundary; the rectangle's rotation is not kept since
/// pip regions are always extracted axis-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct DieCandidate {
    pub boundary: Boundary,
    pub area: f64,
    pub center: (i32, i32),
    pub width: u32,
    pub height: u32,
}

impl DieCandidate {
    /// Derives centroid and box size from an accepted boundary.
    ///
    /// The centroid is truncated toward zero to whole pixels.
    pub fn from_boundary(boundary: Boundary, area: f64) -> Result<Self, PipelineError> {
        let (cx, cy) = Moments::of_polygon(&boundary)
            .centroid()
            .ok_or(PipelineError::DegenerateContour)?;

        let corners = min_area_rect(&boundary);
        let min_x = corners.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = corners.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = corners.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = corners.iter().map(|p| p.y).max().unwrap_or(0);

        Ok(Self {
            boundary,
            area,
            center: (cx as i32, cy as i32),
            width: (max_x - min_x).max(0) as u32,
            height: (max_y - min_y).max(0) as u32,
        })
    }

    /// Label anchor half a box away from the center: the die's lower-right corner.
    pub fn label_origin(&self) -> (i32, i32) {
        let x = self.center.0 as f64 + self.width as f64 / 2.0;
        let y = self.center.1 as f64 + self.height as f64 / 2.0;
        (x as i32, y as i32)
    }
}
