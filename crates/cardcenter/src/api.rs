//! High-level analysis API.
//!
//! [`Analyzer`] is the primary entry point. It owns the two rectangle
//! detectors and the analysis configuration; create it once and analyze
//! any number of front/back pairs.

use image::{DynamicImage, GrayImage};

use crate::detector::{AnalyzeConfig, ArtworkDetector, BorderDetector, ContourDetector};
use crate::error::{CenteringError, Side};
use crate::pipeline::{self, CenteringResult, SideAnalysis};
use crate::preprocess::{decode, to_gray};

/// Front/back centering analyzer.
///
/// # Examples
///
/// ```no_run
/// use cardcenter::Analyzer;
///
/// let front = std::fs::read("front.png").unwrap();
/// let back = std::fs::read("back.png").unwrap();
/// let result = Analyzer::new().analyze_bytes(&front, &back).unwrap();
/// println!("grade {} ({})", result.grade(), result.front_ratio_label());
/// ```
pub struct Analyzer {
    border: Box<dyn BorderDetector>,
    artwork: Box<dyn ArtworkDetector>,
    config: AnalyzeConfig,
}

impl Analyzer {
    /// Contour detectors with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzeConfig::default())
    }

    /// Contour detectors built from `config.detector`.
    pub fn with_config(config: AnalyzeConfig) -> Self {
        let detector = ContourDetector::new(config.detector.clone());
        Self {
            border: Box::new(detector.clone()),
            artwork: Box::new(detector),
            config,
        }
    }

    /// Substitute custom detectors. `config.detector` is ignored; only
    /// orchestration settings apply.
    pub fn with_detectors(
        border: Box<dyn BorderDetector>,
        artwork: Box<dyn ArtworkDetector>,
        config: AnalyzeConfig,
    ) -> Self {
        Self {
            border,
            artwork,
            config,
        }
    }

    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }

    /// Decode two encoded images and analyze them.
    pub fn analyze_bytes(
        &self,
        front: &[u8],
        back: &[u8],
    ) -> Result<CenteringResult, CenteringError> {
        let front = decode(front).map_err(|source| CenteringError::ImageDecode {
            side: Side::Front,
            source,
        })?;
        let back = decode(back).map_err(|source| CenteringError::ImageDecode {
            side: Side::Back,
            source,
        })?;
        self.analyze_images(&front, &back)
    }

    /// Analyze two decoded images of any color type.
    pub fn analyze_images(
        &self,
        front: &DynamicImage,
        back: &DynamicImage,
    ) -> Result<CenteringResult, CenteringError> {
        self.analyze_gray(&to_gray(front), &to_gray(back))
    }

    /// Analyze two grayscale images.
    pub fn analyze_gray(
        &self,
        front: &GrayImage,
        back: &GrayImage,
    ) -> Result<CenteringResult, CenteringError> {
        pipeline::run(
            front,
            back,
            self.border.as_ref(),
            self.artwork.as_ref(),
            self.config.parallel_sides,
        )
    }

    /// Measure a single face without grading.
    pub fn analyze_side(
        &self,
        side: Side,
        image: &DynamicImage,
    ) -> Result<SideAnalysis, CenteringError> {
        pipeline::analyze_side(side, &to_gray(image), self.border.as_ref(), self.artwork.as_ref())
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}
