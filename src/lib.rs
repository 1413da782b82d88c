//! Lattice EDA - Fuel-Rod Lattice Physics Dataset Analysis
//!
//! Loads a headerless CSV of rod enrichments with k-inf and PPPF targets,
//! validates it, computes summary statistics and correlations, and renders
//! four exploratory charts.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod pipeline;
pub mod report;
pub mod stats;

pub use config::{RenderConfig, RenderTarget};
pub use data::LatticeDataset;
pub use pipeline::{Analysis, Pipeline, PipelineError, PipelineOutcome};
