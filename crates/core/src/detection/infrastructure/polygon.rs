//! Boundary simplification for closed integer polygons.

use imageproc::point::Point;

/// Drops points in the middle of straight runs, keeping only the points
/// where the boundary changes direction.
///
/// The boundary is treated as closed. Enclosed area and perimeter are
/// unchanged.
pub fn compress_straight_runs(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let kept: Vec<Point<i32>> = (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let cur = points[i];
            let next = points[(i + 1) % n];
            let (ax, ay) = (cur.x - prev.x, cur.y - prev.y);
            let (bx, by) = (next.x - cur.x, next.y - cur.y);
            let cross = ax as i64 * by as i64 - ay as i64 * bx as i64;
            let dot = ax as i64 * bx as i64 + ay as i64 * by as i64;
            cross != 0 || dot <= 0
        })
        .map(|i| points[i])
        .collect();

    if kept.is_empty() {
        points.to_vec()
    } else {
        kept
    }
}

/// Approximates a closed curve with fewer vertices (Douglas-Peucker).
///
/// The curve is split at its two mutually farthest points, each half is
/// simplified so no dropped point lies more than `epsilon` from the kept
/// chord, and finally any vertex within `epsilon` of the line through its
/// neighbours is removed.
pub fn approximate_closed_polygon(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let n = points.len();
    if n <= 2 {
        return points.to_vec();
    }

    let a = farthest_from(points, 0);
    let b = farthest_from(points, a);
    if a == b {
        return vec![points[a]];
    }
    let (start, end) = (a.min(b), a.max(b));

    let mut keep = vec![false; n];
    keep[start] = true;
    keep[end] = true;

    let forward: Vec<usize> = (start..=end).collect();
    let wrapped: Vec<usize> = (end..n).chain(0..=start).collect();
    douglas_peucker(points, &forward, epsilon, &mut keep);
    douglas_peucker(points, &wrapped, epsilon, &mut keep);

    let mut polygon: Vec<Point<i32>> = (0..n).filter(|&i| keep[i]).map(|i| points[i]).collect();
    remove_flat_vertices(&mut polygon, epsilon);
    polygon
}

fn douglas_peucker(points: &[Point<i32>], chain: &[usize], epsilon: f64, keep: &mut [bool]) {
    if chain.len() < 3 {
        return;
    }
    let first = points[chain[0]];
    let last = points[chain[chain.len() - 1]];

    let mut split = 0;
    let mut max_dist = 0.0;
    for (i, &idx) in chain.iter().enumerate().take(chain.len() - 1).skip(1) {
        let d = distance_to_line(points[idx], first, last);
        if d > max_dist {
            max_dist = d;
            split = i;
        }
    }

    if max_dist > epsilon {
        keep[chain[split]] = true;
        douglas_peucker(points, &chain[..=split], epsilon, keep);
        douglas_peucker(points, &chain[split..], epsilon, keep);
    }
}

fn remove_flat_vertices(polygon: &mut Vec<Point<i32>>, epsilon: f64) {
    while polygon.len() > 3 {
        let n = polygon.len();
        let flat = (0..n).find(|&i| {
            let prev = polygon[(i + n - 1) % n];
            let next = polygon[(i + 1) % n];
            distance_to_line(polygon[i], prev, next) <= epsilon
        });
        match flat {
            Some(i) => {
                polygon.remove(i);
            }
            None => break,
        }
    }
}

fn farthest_from(points: &[Point<i32>], origin: usize) -> usize {
    let o = points[origin];
    let mut best = origin;
    let mut best_dist = 0i64;
    for (i, p) in points.iter().enumerate() {
        let dx = (p.x - o.x) as i64;
        let dy = (p.y - o.y) as i64;
        let d = dx * dx + dy * dy;
        if d > best_dist {
            best_dist = d;
            best = i;
        }
    }
    best
}

/// Perpendicular distance from `p` to the line through `a` and `b`
/// (distance to `a` when the two coincide).
fn distance_to_line(p: Point<i32>, a: Point<i32>, b: Point<i32>) -> f64 {
    let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
    let (px, py) = ((p.x - a.x) as f64, (p.y - a.y) as f64);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return px.hypot(py);
    }
    (dx * py - dy * px).abs() / len
}
