//! cardcenter — trading card centering analysis from front/back photos.
//!
//! The pipeline stages are:
//!
//! 1. **Preprocess** – decode, grayscale, blur, Canny edge map.
//! 2. **Border** – largest external contour → outer card rectangle.
//! 3. **Artwork** – second-largest contour inside the card crop → artwork rectangle.
//! 4. **Gaps** – left/right/top/bottom border thickness.
//! 5. **Ratio** – worse-side percentage per axis; the worse axis limits.
//! 6. **Grade** – ordered PSA-style threshold table over front/back ratios.
//!
//! # Public API
//! - [`Analyzer`] as the entry point
//! - [`AnalyzeConfig`] for tuning and JSON config files
//! - [`BorderDetector`] / [`ArtworkDetector`] to swap the detection heuristics
//! - result structures and the pure ratio/grade functions

mod api;
mod contour;
pub mod detector;
mod error;
mod geometry;
pub mod grade;
mod pipeline;
pub mod preprocess;
pub mod ratio;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::Analyzer;
pub use contour::simplified_bounds;
pub use detector::{
    AnalyzeConfig, ArtworkDetector, BorderDetector, ContourDetector, DetectorConfig, EdgeConfig,
};
pub use error::{CenteringError, ConfigError, DetectionError, Side, Stage};
pub use geometry::{measure_gaps, BorderGaps, Rect};
pub use grade::{map_grade, GradeRule, CENTERING_RULES, FLOOR_GRADE};
pub use pipeline::{analyze_side, CenteringResult, CenteringSummary, SideAnalysis};
pub use ratio::{axis_ratio, ratio_fraction, ratio_label, AxisRatios};
