//! Centering ratios from border gaps.
//!
//! An axis ratio is the smaller gap as a percentage of both gaps combined:
//! 50 means perfectly centered, 0 means the artwork touches one edge. The
//! worse of the two axes limits the grade.

use serde::{Deserialize, Serialize};

use crate::geometry::BorderGaps;

/// Worse-side percentage for one axis.
///
/// Returns 0 when the gaps sum to zero or less. Negative gaps are not
/// clamped, so the result can leave `[0, 50]` on noisy detections.
pub fn axis_ratio(a: f64, b: f64) -> f64 {
    let total = a + b;
    if total <= 0.0 {
        return 0.0;
    }
    100.0 * a.min(b) / total
}

/// Per-axis centering percentages of one card face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRatios {
    #[serde(rename = "horizontal_ratio_percent")]
    pub horizontal: f64,
    #[serde(rename = "vertical_ratio_percent")]
    pub vertical: f64,
    /// `min(horizontal, vertical)`.
    #[serde(rename = "limiting_ratio_percent")]
    pub limiting: f64,
}

impl AxisRatios {
    pub fn from_gaps(gaps: &BorderGaps) -> Self {
        let horizontal = axis_ratio(gaps.left, gaps.right);
        let vertical = axis_ratio(gaps.top, gaps.bottom);
        Self {
            horizontal,
            vertical,
            limiting: horizontal.min(vertical),
        }
    }
}

/// Limiting ratio together with the per-axis breakdown.
pub fn from_gaps(gaps: &BorderGaps) -> (f64, AxisRatios) {
    let ratios = AxisRatios::from_gaps(gaps);
    (ratios.limiting, ratios)
}

/// Display form `"<larger>/<smaller>"`, e.g. `"60/40"` for 40%.
///
/// The limiting percent is rounded first and the other side is its
/// complement, so both numbers always add up to 100.
pub fn ratio_label(limiting_percent: f64) -> String {
    let worse = limiting_percent.round() as i64;
    format!("{}/{}", 100 - worse, worse)
}

/// Limiting percent as a fraction in `[0, 1]`.
pub fn ratio_fraction(limiting_percent: f64) -> f64 {
    limiting_percent / 100.0
}
