//! Terminal output formatting
//!
//! Display utilities for CLI results. The engine itself never prints; all
//! presentation lives here and in the binary.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
