//! Core domain types
//!
//! The fundamental vocabulary of the engine: validated words, per-position
//! feedback, its base-3 pattern encoding, and the typed error enum. All types
//! here are pure values with no I/O.

mod error;
mod feedback;
mod word;

pub use error::SolverError;
pub use feedback::{Feedback, LetterOutcome, Pattern};
pub use word::Word;

/// Fixed word length for the game
pub const WORD_LEN: usize = 5;
