//! Wordle word representation
//!
//! A Word stores a validated, lowercase 5-letter word as both text and bytes.

use super::{SolverError, WORD_LEN};
use std::fmt;

/// A validated 5-letter word
///
/// Construction normalizes to lowercase and rejects anything that is not
/// exactly five ASCII letters, so every other component can assume a
/// well-formed word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LEN],
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidGuessLength`] if the length is not
    /// exactly 5, or [`SolverError::InvalidCharacters`] for anything outside
    /// a-z after lowercasing.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, SolverError> {
        let text: String = text.into().to_lowercase();

        if text.len() != WORD_LEN {
            return Err(SolverError::InvalidGuessLength(text.chars().count()));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(SolverError::InvalidCharacters(text));
        }

        // Safe to unwrap: length was validated above
        let chars: [u8; WORD_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LEN] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Per-letter occurrence counts, indexed by `letter - b'a'`
    ///
    /// Used for pattern scoring and count-bound checks with duplicate letters.
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> [u8; 26] {
        let mut counts = [0u8; 26];
        for &ch in &self.chars {
            counts[(ch - b'a') as usize] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
