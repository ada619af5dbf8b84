//! Word lists
//!
//! Embedded reference lists compiled into the binary, plus runtime loading
//! for custom dictionaries and frequency tables. Lists are plain values:
//! callers own them and inject them into sessions, never ambient globals.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::Word;
use crate::prior::WordListMode;

/// The embedded reference list for a mode, as validated words
#[must_use]
pub fn embedded_words(mode: WordListMode) -> Vec<Word> {
    match mode {
        WordListMode::Allowed => loader::words_from_slice(ALLOWED),
        WordListMode::Answers => loader::words_from_slice(ANSWERS),
    }
}
