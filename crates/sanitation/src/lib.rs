// File: crates/sanitation/src/lib.rs
// Summary: Sanitation-access pipeline library; `run` drives fetch, transform and plot.

pub mod cohorts;
pub mod config;
pub mod pipeline;
pub mod plot;

pub use cohorts::{CohortStyle, COHORTS};
pub use config::{ArtifactPaths, PipelineMode, RunOptions};
pub use pipeline::{run, run_with_source, RunReport};
