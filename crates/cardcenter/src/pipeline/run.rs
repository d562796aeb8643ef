use image::GrayImage;

use super::{analyze_side, CenteringResult};
use crate::detector::{ArtworkDetector, BorderDetector};
use crate::error::{CenteringError, Side};
use crate::grade::map_grade;

/// Analyze both faces and grade them.
///
/// With `parallel` the faces run on the rayon pool. If both fail, the front
/// error is reported.
pub(crate) fn run(
    front: &GrayImage,
    back: &GrayImage,
    border: &dyn BorderDetector,
    artwork: &dyn ArtworkDetector,
    parallel: bool,
) -> Result<CenteringResult, CenteringError> {
    let (front_res, back_res) = if parallel {
        rayon::join(
            || analyze_side(Side::Front, front, border, artwork),
            || analyze_side(Side::Back, back, border, artwork),
        )
    } else {
        let f = analyze_side(Side::Front, front, border, artwork)?;
        (Ok(f), analyze_side(Side::Back, back, border, artwork))
    };
    let front = front_res?;
    let back = back_res?;

    let grade = map_grade(front.limiting_ratio(), back.limiting_ratio());
    tracing::info!(
        "centering grade {} (front {:.1}%, back {:.1}%)",
        grade,
        front.limiting_ratio(),
        back.limiting_ratio()
    );
    Ok(CenteringResult::new(front, back, grade))
}
