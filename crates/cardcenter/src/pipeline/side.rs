use image::GrayImage;

use super::SideAnalysis;
use crate::detector::{ArtworkDetector, BorderDetector};
use crate::error::{CenteringError, Side, Stage};
use crate::geometry::measure_gaps;
use crate::ratio::AxisRatios;

/// Run border, artwork, gap, and ratio stages for one card face.
pub fn analyze_side(
    side: Side,
    gray: &GrayImage,
    border: &dyn BorderDetector,
    artwork: &dyn ArtworkDetector,
) -> Result<SideAnalysis, CenteringError> {
    let outer = border
        .detect_border(gray)
        .map_err(|source| CenteringError::Detection {
            side,
            stage: Stage::OuterBorder,
            source,
        })?;
    let inner = artwork
        .detect_artwork(gray, &outer)
        .map_err(|source| CenteringError::Detection {
            side,
            stage: Stage::Artwork,
            source,
        })?;

    let gaps = measure_gaps(&outer, &inner);
    if gaps.has_negative() {
        tracing::warn!(
            "{} artwork extends past the outer border: gaps l={} r={} t={} b={}",
            side,
            gaps.left,
            gaps.right,
            gaps.top,
            gaps.bottom
        );
    }
    let ratios = AxisRatios::from_gaps(&gaps);
    tracing::info!(
        "{} centering: horizontal {:.1}%, vertical {:.1}%, limiting {:.1}%",
        side,
        ratios.horizontal,
        ratios.vertical,
        ratios.limiting
    );

    Ok(SideAnalysis::new(outer, inner, gaps, ratios))
}
