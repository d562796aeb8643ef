use serde::{Deserialize, Serialize};

use crate::geometry::{BorderGaps, Rect};
use crate::ratio::{ratio_fraction, ratio_label, AxisRatios};

/// Measurements for one card face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideAnalysis {
    /// Card outline `[x, y, w, h]`.
    pub outer_border: Rect,
    /// Artwork panel `[x, y, w, h]`, same coordinates as `outer_border`.
    pub artwork_rectangle: Rect,
    /// Border thickness per side.
    pub borders: BorderGaps,
    pub ratios: AxisRatios,
    /// Limiting percent, e.g. `45.0` for 55/45 centering.
    pub psa_centering_ratio: f64,
}

impl SideAnalysis {
    pub fn new(
        outer_border: Rect,
        artwork_rectangle: Rect,
        borders: BorderGaps,
        ratios: AxisRatios,
    ) -> Self {
        Self {
            outer_border,
            artwork_rectangle,
            borders,
            ratios,
            psa_centering_ratio: ratios.limiting,
        }
    }

    pub fn horizontal_ratio(&self) -> f64 {
        self.ratios.horizontal
    }

    pub fn vertical_ratio(&self) -> f64 {
        self.ratios.vertical
    }

    pub fn limiting_ratio(&self) -> f64 {
        self.ratios.limiting
    }
}

/// Flat summary fields consumed by downstream storage and UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenteringSummary {
    pub front_centering_ratio: f64,
    pub back_centering_ratio: f64,
    pub centering_grade: u8,
    pub front_ratio_string: String,
    pub back_ratio_string: String,
    pub front_ratio_value: f64,
    pub back_ratio_value: f64,
}

/// Full front/back centering result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenteringResult {
    pub front: SideAnalysis,
    pub back: SideAnalysis,
    pub summary: CenteringSummary,
}

impl CenteringResult {
    pub fn new(front: SideAnalysis, back: SideAnalysis, grade: u8) -> Self {
        let (f, b) = (front.limiting_ratio(), back.limiting_ratio());
        let summary = CenteringSummary {
            front_centering_ratio: f,
            back_centering_ratio: b,
            centering_grade: grade,
            front_ratio_string: ratio_label(f),
            back_ratio_string: ratio_label(b),
            front_ratio_value: ratio_fraction(f),
            back_ratio_value: ratio_fraction(b),
        };
        Self {
            front,
            back,
            summary,
        }
    }

    pub fn grade(&self) -> u8 {
        self.summary.centering_grade
    }

    pub fn front_ratio_label(&self) -> &str {
        &self.summary.front_ratio_string
    }

    pub fn back_ratio_label(&self) -> &str {
        &self.summary.back_ratio_string
    }

    pub fn front_ratio_fraction(&self) -> f64 {
        self.summary.front_ratio_value
    }

    pub fn back_ratio_fraction(&self) -> f64 {
        self.summary.back_ratio_value
    }
}
