//! Multi-threshold blob detection.
//!
//! The image is binarized at a ladder of thresholds. At each level every
//! contour (outer and hole) is measured and filtered by area, circularity,
//! inertia ratio, convexity and colour. Surviving blob centres are grouped
//! across levels, and a group found at enough levels becomes a keypoint.

use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::{arc_length, convex_hull};
use imageproc::point::Point;

use crate::detection::domain::grayscale::binarize;
use crate::shared::moments::{contour_area, Moments};

/// Half-open acceptance interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// Blob detector parameters. A `None` filter is disabled.
#[derive(Clone, Debug, PartialEq)]
pub struct BlobParams {
    pub min_threshold: u8,
    pub max_threshold: u8,
    pub threshold_step: u8,
    /// Number of threshold levels a blob must appear in.
    pub min_repeatability: usize,
    pub min_dist_between_blobs: f64,
    /// Required binary value at the blob centre (0 = dark blobs).
    pub blob_color: Option<u8>,
    pub area: Option<Bounds>,
    /// `4π·area / perimeter²`; 1 for a perfect circle.
    pub circularity: Option<Bounds>,
    /// Ratio of minor to major second moment; 1 for rotationally symmetric blobs.
    pub inertia_ratio: Option<Bounds>,
    /// Area over convex-hull area.
    pub convexity: Option<Bounds>,
}

impl Default for BlobParams {
    fn default() -> Self {
        Self {
            min_threshold: 50,
            max_threshold: 220,
            threshold_step: 10,
            min_repeatability: 2,
            min_dist_between_blobs: 10.0,
            blob_color: Some(0),
            area: Some(Bounds::new(25.0, 5000.0)),
            circularity: None,
            inertia_ratio: Some(Bounds::at_least(0.1)),
            convexity: Some(Bounds::at_least(0.95)),
        }
    }
}

/// A detected blob in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    pub diameter: f64,
}

#[derive(Clone, Copy, Debug)]
struct Blob {
    x: f64,
    y: f64,
    radius: f64,
    confidence: f64,
}

pub struct BlobDetector {
    params: BlobParams,
}

impl BlobDetector {
    pub fn new(params: BlobParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &BlobParams {
        &self.params
    }

    pub fn detect(&self, gray: &GrayImage) -> Vec<Keypoint> {
        if gray.width() == 0 || gray.height() == 0 {
            return Vec::new();
        }

        let step = self.params.threshold_step.max(1) as u32;
        let mut groups: Vec<Vec<Blob>> = Vec::new();
        let mut level = self.params.min_threshold as u32;
        while level < self.params.max_threshold as u32 {
            let binary = binarize(gray, level as u8);
            let blobs = self.find_blobs(&binary);
            self.merge_into_groups(&mut groups, blobs);
            level += step;
        }

        groups
            .iter()
            .filter(|group| group.len() >= self.params.min_repeatability)
            .map(|group| to_keypoint(group))
            .collect()
    }

    fn find_blobs(&self, binary: &GrayImage) -> Vec<Blob> {
        let mut blobs = Vec::new();
        for contour in find_contours::<i32>(binary) {
            let points = &contour.points;
            let moments = Moments::of_polygon(points);

            if let Some(bounds) = self.params.area {
                if !bounds.contains(moments.m00) {
                    continue;
                }
            }

            if let Some(bounds) = self.params.circularity {
                let perimeter = arc_length(points, true);
                let ratio = 4.0 * std::f64::consts::PI * moments.m00 / (perimeter * perimeter);
                if !bounds.contains(ratio) {
                    continue;
                }
            }

            let mut confidence = 1.0;
            if let Some(bounds) = self.params.inertia_ratio {
                let Some(ratio) = inertia_ratio(&moments) else {
                    continue;
                };
                if !bounds.contains(ratio) {
                    continue;
                }
                confidence = ratio * ratio;
            }

            if let Some(bounds) = self.params.convexity {
                let hull = convex_hull(points.as_slice());
                let hull_area = contour_area(&hull);
                if hull_area.abs() < f64::EPSILON || !bounds.contains(moments.m00 / hull_area) {
                    continue;
                }
            }

            let Some((x, y)) = moments.centroid() else {
                continue;
            };

            if let Some(color) = self.params.blob_color {
                let px = (x.round().max(0.0) as u32).min(binary.width() - 1);
                let py = (y.round().max(0.0) as u32).min(binary.height() - 1);
                if binary.get_pixel(px, py).0[0] != color {
                    continue;
                }
            }

            blobs.push(Blob {
                x,
                y,
                radius: median_distance(points, x, y),
                confidence,
            });
        }
        blobs
    }

    /// Attaches each blob to the first existing group whose median member is
    /// close enough; otherwise starts a new group. Groups started at this
    /// level only become visible at the next one. Members stay sorted by
    /// radius.
    fn merge_into_groups(&self, groups: &mut Vec<Vec<Blob>>, blobs: Vec<Blob>) {
        let mut started = Vec::new();
        for blob in blobs {
            let matched = groups.iter_mut().find(|group| {
                let rep = group[group.len() / 2];
                let dist = (rep.x - blob.x).hypot(rep.y - blob.y);
                dist < self.params.min_dist_between_blobs || dist < rep.radius || dist < blob.radius
            });
            match matched {
                Some(group) => {
                    let at = group.partition_point(|b| b.radius <= blob.radius);
                    group.insert(at, blob);
                }
                None => started.push(vec![blob]),
            }
        }
        groups.extend(started);
    }
}

impl Default for BlobDetector {
    fn default() -> Self {
        Self::new(BlobParams::default())
    }
}

fn inertia_ratio(moments: &Moments) -> Option<f64> {
    let (mu20, mu11, mu02) = moments.central()?;
    let denominator = (2.0 * mu11).hypot(mu20 - mu02);
    if denominator <= 1e-2 {
        return Some(1.0);
    }
    let cos = (mu20 - mu02) / denominator;
    let sin = 2.0 * mu11 / denominator;
    let half_sum = 0.5 * (mu20 + mu02);
    let half_diff = 0.5 * (mu20 - mu02);
    let i_min = half_sum - half_diff * cos - mu11 * sin;
    let i_max = half_sum + half_diff * cos + mu11 * sin;
    if i_max == 0.0 {
        return None;
    }
    Some(i_min / i_max)
}

fn median_distance(points: &[Point<i32>], x: f64, y: f64) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let mut dists: Vec<f64> = points
        .iter()
        .map(|p| (p.x as f64 - x).hypot(p.y as f64 - y))
        .collect();
    dists.sort_by(f64::total_cmp);
    let n = dists.len();
    (dists[(n - 1) / 2] + dists[n / 2]) / 2.0
}

fn to_keypoint(group: &[Blob]) -> Keypoint {
    let (mut sx, mut sy, mut norm) = (0.0, 0.0, 0.0);
    for b in group {
        sx += b.confidence * b.x;
        sy += b.confidence * b.y;
        norm += b.confidence;
    }
    if norm == 0.0 {
        norm = 1.0;
    }
    Keypoint {
        x: sx / norm,
        y: sy / norm,
        diameter: group[group.len() / 2].radius * 2.0,
    }
}
