//! Contour extraction and ranking over binary edge maps.
//!
//! Contours come from `imageproc`'s border following, which reports every
//! outer and hole border together with its parent. Top-level outer borders
//! (no parent) are the external contours. The nested set keeps the outer
//! border of every edge loop at any depth; a one-pixel ring also yields a
//! hole border along the same pixels, which is left out so each loop counts
//! once.

use image::GrayImage;
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::geometry::{approximate_polygon_dp, arc_length, contour_area};
use imageproc::point::Point;

use crate::geometry::Rect;

/// Outer borders at every nesting level.
pub(crate) fn nested_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .collect()
}

/// Outer borders that are not nested inside any other border.
pub(crate) fn external_contours(edges: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(edges)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .collect()
}

/// Contour with the largest enclosed area; the earliest one wins ties.
pub(crate) fn largest_by_area(contours: &[Contour<i32>]) -> Option<&Contour<i32>> {
    let mut best: Option<(&Contour<i32>, f64)> = None;
    for c in contours {
        let area = contour_area(&c.points);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((c, area)),
        }
    }
    best.map(|(c, _)| c)
}

/// Contours ordered by decreasing area. The sort is stable, so equal areas
/// keep their discovery order.
pub(crate) fn rank_by_area(contours: &[Contour<i32>]) -> Vec<&Contour<i32>> {
    let mut ranked: Vec<(&Contour<i32>, f64)> = contours
        .iter()
        .map(|c| (c, contour_area(&c.points)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(c, _)| c).collect()
}

/// Simplify a closed contour with tolerance `epsilon_frac * perimeter` and
/// return the bounding rectangle of the resulting polygon.
pub fn simplified_bounds(points: &[Point<i32>], epsilon_frac: f64) -> Option<Rect> {
    if points.len() < 3 {
        return Rect::bounding(points);
    }
    let epsilon = epsilon_frac * arc_length(points, true);
    if !(epsilon > 0.0) {
        return Rect::bounding(points);
    }
    Rect::bounding(&approximate_closed(points, epsilon))
}

/// Douglas-Peucker over a closed curve.
///
/// The curve is cut at the point farthest from its start and both arcs are
/// simplified as open polylines, so the first and last points (which are
/// neighbours on a closed contour) never form the initial chord.
fn approximate_closed(points: &[Point<i32>], epsilon: f64) -> Vec<Point<i32>> {
    let start = points[0];
    let split = farthest_from(points, start);
    if split == 0 {
        return vec![start];
    }

    let mut polygon = approximate_polygon_dp(&points[..=split], epsilon, false);
    let mut tail = points[split..].to_vec();
    tail.push(start);
    let back = approximate_polygon_dp(&tail, epsilon, false);

    // Both arcs share the split point, and the tail ends on `start` again.
    polygon.pop();
    polygon.extend(back);
    polygon.pop();
    polygon
}

/// Index of the point farthest from `origin`; the earliest one wins ties.
fn farthest_from(points: &[Point<i32>], origin: Point<i32>) -> usize {
    let mut best = (0, 0i64);
    for (i, p) in points.iter().enumerate() {
        let dx = i64::from(p.x - origin.x);
        let dy = i64::from(p.y - origin.y);
        let d2 = dx * dx + dy * dy;
        if d2 > best.1 {
            best = (i, d2);
        }
    }
    best.0
}
