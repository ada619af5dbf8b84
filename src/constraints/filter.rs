//! Candidate filtering
//!
//! Narrows a word list to the words consistent with a [`ConstraintStore`].
//! Purely functional: the same store yields the same candidates whether the
//! list is filtered once against the full accumulated store or re-filtered
//! after every guess, so callers recompute from the full list each turn
//! instead of patching a previous result.

use super::ConstraintStore;
use crate::core::Word;

/// Words from `words` that satisfy every accumulated constraint
///
/// Preserves the input order, so a sorted word list stays sorted.
///
/// # Examples
/// ```
/// use wordle_engine::constraints::{ConstraintStore, filter_candidates};
/// use wordle_engine::core::{Feedback, Word};
///
/// let words = vec![
///     Word::new("robot").unwrap(),
///     Word::new("arose").unwrap(),
///     Word::new("round").unwrap(),
/// ];
///
/// let guess = Word::new("arose").unwrap();
/// let mut store = ConstraintStore::new();
/// store.apply(&guess, &Feedback::score(&guess, &words[0]));
///
/// let candidates = filter_candidates(&words, &store);
/// assert!(candidates.iter().any(|w| w.text() == "robot"));
/// assert!(!candidates.iter().any(|w| w.text() == "arose"));
/// ```
#[must_use]
pub fn filter_candidates<'a>(words: &'a [Word], store: &ConstraintStore) -> Vec<&'a Word> {
    words.iter().filter(|word| store.is_valid(word)).collect()
}
