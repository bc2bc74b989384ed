//! Display models for report output
//!
//! Display models transform service response types into the structures the
//! output back-ends print.

mod report;
mod test_row;

pub use report::{RenderedReport, ScoreTier, TestCard, TextTarget, render, render_for};
pub use test_row::TestRowDisplay;
