//! Command implementations

pub mod analyze;
pub mod assist;
pub mod benchmark;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
