//! Artwork panel: second-largest contour inside the card crop.
//!
//! Inside the crop the card's own edge is expected to come back as the
//! largest contour, so the runner-up is taken as the artwork. Every edge loop
//! contributes its outer border once, at any nesting depth. The choice is
//! not checked for containment or size; two similar artwork elements, or a
//! card edge that does not re-appear, can make it pick the wrong contour.

use image::{imageops, GrayImage};

use super::DetectorConfig;
use crate::contour::{nested_contours, rank_by_area, simplified_bounds};
use crate::error::DetectionError;
use crate::geometry::Rect;
use crate::preprocess::edge_map;

/// Artwork rectangle inside `outer`, in full-image coordinates.
pub fn detect_artwork(
    gray: &GrayImage,
    outer: &Rect,
    config: &DetectorConfig,
) -> Result<Rect, DetectionError> {
    let (w, h) = gray.dimensions();
    let region = outer.clip_to(w, h).ok_or(DetectionError::EmptyRegion {
        x: outer.x,
        y: outer.y,
        width: outer.width,
        height: outer.height,
    })?;

    let crop = imageops::crop_imm(
        gray,
        region.x as u32,
        region.y as u32,
        region.width as u32,
        region.height as u32,
    )
    .to_image();
    let edges = edge_map(&crop, &config.edges);
    let local = artwork_from_edges(&edges, config.approx_epsilon_frac)?;
    Ok(local.translated(region.x, region.y))
}

/// Contour selection step of [`detect_artwork`], in crop-local coordinates.
pub fn artwork_from_edges(
    edges: &GrayImage,
    epsilon_frac: f64,
) -> Result<Rect, DetectionError> {
    let contours = nested_contours(edges);
    let found = contours.len();
    tracing::debug!("{} contours inside card region", found);
    if found < 2 {
        return Err(DetectionError::ArtworkNotDistinguishable { found });
    }

    let ranked = rank_by_area(&contours);
    simplified_bounds(&ranked[1].points, epsilon_frac)
        .filter(Rect::is_valid)
        .ok_or(DetectionError::ArtworkNotDistinguishable { found })
}
