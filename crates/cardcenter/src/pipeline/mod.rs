//! Analysis orchestration.
//!
//! Per face: outer border -> artwork -> gaps -> ratios. The two faces are
//! independent and may run concurrently; the grade is computed once both
//! limiting ratios are known. Any failure aborts the whole analysis.

mod result;
mod run;
mod side;

pub use result::{CenteringResult, CenteringSummary, SideAnalysis};
pub(crate) use run::run;
pub use side::analyze_side;
