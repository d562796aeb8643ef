//! Outer card border: largest external contour of the edge map.
//!
//! Picking the maximum-area contour ignores small clutter in the background
//! but will lock onto any larger object in frame.

use image::GrayImage;

use super::DetectorConfig;
use crate::contour::{external_contours, largest_by_area, simplified_bounds};
use crate::error::DetectionError;
use crate::geometry::Rect;
use crate::preprocess::edge_map;

/// Bounding rectangle of the card silhouette in `gray`.
pub fn detect_outer_border(
    gray: &GrayImage,
    config: &DetectorConfig,
) -> Result<Rect, DetectionError> {
    let edges = edge_map(gray, &config.edges);
    outer_border_from_edges(&edges, config.approx_epsilon_frac)
}

/// Contour selection step of [`detect_outer_border`] on a ready edge map.
pub fn outer_border_from_edges(
    edges: &GrayImage,
    epsilon_frac: f64,
) -> Result<Rect, DetectionError> {
    let contours = external_contours(edges);
    tracing::debug!("{} external contours", contours.len());

    let largest = largest_by_area(&contours).ok_or(DetectionError::NoOuterBorder)?;
    let rect = simplified_bounds(&largest.points, epsilon_frac)
        .filter(Rect::is_valid)
        .ok_or(DetectionError::NoOuterBorder)?;

    tracing::debug!(
        "outer border {}x{} at ({}, {})",
        rect.width,
        rect.height,
        rect.x,
        rect.y
    );
    Ok(rect)
}
