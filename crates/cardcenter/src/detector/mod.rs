//! Rectangle detectors for the card outline and the artwork panel.
//!
//! The pipeline only depends on the [`BorderDetector`] and
//! [`ArtworkDetector`] traits. [`ContourDetector`] implements both with the
//! edge-map + contour-ranking heuristics in [`border`] and [`artwork`].

pub mod artwork;
pub mod border;
mod config;

use image::GrayImage;

use crate::error::DetectionError;
use crate::geometry::Rect;

pub use config::{AnalyzeConfig, DetectorConfig, EdgeConfig};

/// Locates the card's outer boundary in a grayscale photo.
pub trait BorderDetector: Send + Sync {
    fn detect_border(&self, gray: &GrayImage) -> Result<Rect, DetectionError>;
}

/// Locates the artwork panel inside a previously detected outer border.
///
/// The returned rectangle is in the same full-image coordinates as `outer`.
pub trait ArtworkDetector: Send + Sync {
    fn detect_artwork(&self, gray: &GrayImage, outer: &Rect) -> Result<Rect, DetectionError>;
}

/// Contour-ranking detector: largest external contour for the card,
/// second-largest nested contour inside the crop for the artwork.
#[derive(Debug, Clone, Default)]
pub struct ContourDetector {
    config: DetectorConfig,
}

impl ContourDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl BorderDetector for ContourDetector {
    fn detect_border(&self, gray: &GrayImage) -> Result<Rect, DetectionError> {
        border::detect_outer_border(gray, &self.config)
    }
}

impl ArtworkDetector for ContourDetector {
    fn detect_artwork(&self, gray: &GrayImage, outer: &Rect) -> Result<Rect, DetectionError> {
        artwork::detect_artwork(gray, outer, &self.config)
    }
}
