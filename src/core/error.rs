//! Typed errors for the solving engine
//!
//! Every fallible operation in the library returns one of these kinds; the
//! binary maps them into `anyhow` at the boundary. The library itself never
//! prints or logs.

use super::WORD_LEN;
use thiserror::Error;

/// Error kinds surfaced by the solving engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Feedback string has the wrong length or an unrecognized symbol
    #[error("feedback must be {len} symbols over b/y/g, got `{0}`", len = WORD_LEN)]
    InvalidFeedbackFormat(String),

    /// Guess length differs from the configured word length
    #[error("guess must be exactly {len} letters, got {0}", len = WORD_LEN)]
    InvalidGuessLength(usize),

    /// Guess contains characters outside a-z
    #[error("word `{0}` contains characters outside a-z")]
    InvalidCharacters(String),

    /// The accumulated constraints are unsatisfiable over the word list.
    ///
    /// Signals either contradictory feedback or a dictionary gap; callers
    /// must surface this rather than substitute an arbitrary guess.
    #[error("no candidate words satisfy the accumulated constraints")]
    NoCandidatesRemaining,

    /// Unknown language tag in the session configuration
    #[error("unsupported language tag `{0}`")]
    UnsupportedLanguage(String),

    /// Unknown word list mode name
    #[error("unsupported word list mode `{0}`")]
    UnsupportedMode(String),

    /// A guess was submitted after the session reached a terminal state
    #[error("session already finished; no further guesses accepted")]
    SessionFinished,

    /// The external suggestion provider failed or returned an unusable word
    #[error("suggestion provider failed: {0}")]
    ExternalProviderFailure(String),
}
