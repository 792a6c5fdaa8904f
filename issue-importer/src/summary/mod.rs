//! Run summary types and helpers.

mod plan;
mod run_summary;

pub use plan::{DependencyEdge, RunPlan};
pub use run_summary::RunSummary;
