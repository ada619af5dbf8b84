//! Wordle solving engine
//!
//! Incremental constraint propagation over partial feedback combined with
//! information-theoretic guess selection over a prior-weighted candidate
//! distribution, with optional two-ply lookahead and a depth-limited
//! brute-force expected-turns search.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_engine::core::{Feedback, Pattern, Word};
//!
//! let guess = Word::new("crane").unwrap();
//! let secret = Word::new("slate").unwrap();
//!
//! let feedback = Feedback::score(&guess, &secret);
//! println!("Pattern value: {}", Pattern::encode(feedback).value());
//! ```

// Core domain types
pub mod core;

// Constraint accumulation and candidate filtering
pub mod constraints;

// Likelihood weighting over candidate secrets
pub mod prior;

// Guess selection algorithms
pub mod solver;

// Game session state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
