use imageproc::point::Point;

/// Spatial moments (up to second order) of a closed polygon.
///
/// Computed with Green's theorem over the polygon edges, so the result depends
/// only on the vertices and not on how densely the boundary is sampled.
/// Signs are normalized so `m00` is the unsigned enclosed area regardless of
/// winding direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Moments {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m20: f64,
    pub m11: f64,
    pub m02: f64,
}

impl Moments {
    pub fn of_polygon(points: &[Point<i32>]) -> Self {
        let Some(&last) = points.last() else {
            return Self::default();
        };

        let (mut a00, mut a10, mut a01) = (0.0, 0.0, 0.0);
        let (mut a20, mut a11, mut a02) = (0.0, 0.0, 0.0);

        let mut prev = last;
        for &p in points {
            let (xp, yp) = (prev.x as f64, prev.y as f64);
            let (x, y) = (p.x as f64, p.y as f64);
            let cross = xp * y - x * yp;
            let xs = xp + x;
            let ys = yp + y;

            a00 += cross;
            a10 += cross * xs;
            a01 += cross * ys;
            a20 += cross * (xp * xs + x * x);
            a11 += cross * (xp * (ys + yp) + x * (ys + y));
            a02 += cross * (yp * ys + y * y);
            prev = p;
        }

        let sign = if a00 < 0.0 { -1.0 } else { 1.0 };
        Self {
            m00: sign * a00 / 2.0,
            m10: sign * a10 / 6.0,
            m01: sign * a01 / 6.0,
            m20: sign * a20 / 12.0,
            m11: sign * a11 / 24.0,
            m02: sign * a02 / 12.0,
        }
    }

    /// Area-weighted center, or `None` when the polygon encloses no area.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }

    /// Second-order central moments `(mu20, mu11, mu02)`.
    pub fn central(&self) -> Option<(f64, f64, f64)> {
        let (cx, cy) = self.centroid()?;
        Some((
            self.m20 - self.m10 * cx,
            self.m11 - self.m10 * cy,
            self.m02 - self.m01 * cy,
        ))
    }
}

/// Unsigned area enclosed by a closed polygon.
pub fn contour_area(points: &[Point<i32>]) -> f64 {
    Moments::of_polygon(points).m00
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_unit_square_moments() {
        let m = Moments::of_polygon(&pts(&[(0, 0), (1, 0), (1, 1), (0, 1)]));
        assert_relative_eq!(m.m00, 1.0);
        assert_relative_eq!(m.m10, 0.5);
        assert_relative_eq!(m.m01, 0.5);
        assert_relative_eq!(m.m20, 1.0 / 3.0);
        assert_relative_eq!(m.m11, 0.25);
        assert_relative_eq!(m.m02, 1.0 / 3.0);
    }

    #[test]
    fn test_winding_direction_does_not_change_area() {
        let cw = pts(&[(0, 0), (0, 10), (20, 10), (20, 0)]);
        let ccw = pts(&[(0, 0), (20, 0), (20, 10), (0, 10)]);
        assert_relative_eq!(contour_area(&cw), 200.0);
        assert_relative_eq!(contour_area(&ccw), 200.0);
    }

    #[test]
    fn test_centroid_of_offset_rectangle() {
        let m = Moments::of_polygon(&pts(&[(10, 20), (30, 20), (30, 60), (10, 60)]));
        let (cx, cy) = m.centroid().unwrap();
        assert_relative_eq!(cx, 20.0);
        assert_relative_eq!(cy, 40.0);
    }

    #[test]
    fn test_central_moments_are_translation_invariant() {
        let a = Moments::of_polygon(&pts(&[(0, 0), (8, 0), (8, 4), (0, 4)]));
        let b = Moments::of_polygon(&pts(&[(100, 50), (108, 50), (108, 54), (100, 54)]));
        let (a20, a11, a02) = a.central().unwrap();
        let (b20, b11, b02) = b.central().unwrap();
        assert_relative_eq!(a20, b20, epsilon = 1e-6);
        assert_relative_eq!(a11, b11, epsilon = 1e-6);
        assert_relative_eq!(a02, b02, epsilon = 1e-6);
        assert!(a20 > a02);
    }

    #[test]
    fn test_degenerate_polygon_has_no_centroid() {
        let line = pts(&[(0, 0), (5, 0), (10, 0)]);
        assert_eq!(contour_area(&line), 0.0);
        assert!(Moments::of_polygon(&line).centroid().is_none());
    }

    #[test]
    fn test_empty_polygon() {
        assert_eq!(Moments::of_polygon(&[]), Moments::default());
    }
}
