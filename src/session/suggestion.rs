//! External suggestion providers
//!
//! A provider is an injected capability (an LLM assistant, a remote service,
//! a scripted stub in tests) that proposes a guess from the current candidate
//! list. The session never trusts a suggestion as ground truth: every
//! proposal is validated against the candidate set before it is accepted,
//! and any failure falls back to the optimizer.

use crate::core::{Feedback, SolverError, Word};

/// A proposed guess plus free-text rationale from an external provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested word
    pub word: String,
    /// Why the provider chose it
    pub rationale: String,
}

/// Something that can propose the next guess
///
/// Implementations own their transport, timeouts, and retries; the core only
/// sees a word or a failure.
pub trait SuggestionProvider {
    /// Propose a guess given the remaining candidates and the game so far
    ///
    /// # Errors
    /// Returns [`SolverError::ExternalProviderFailure`] when no usable
    /// suggestion can be produced.
    fn suggest(
        &self,
        candidates: &[&Word],
        history: &[(Word, Feedback)],
        word_len: usize,
        language: &str,
    ) -> Result<Suggestion, SolverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedProvider(&'static str);

    impl SuggestionProvider for CannedProvider {
        fn suggest(
            &self,
            _candidates: &[&Word],
            _history: &[(Word, Feedback)],
            _word_len: usize,
            _language: &str,
        ) -> Result<Suggestion, SolverError> {
            Ok(Suggestion {
                word: self.0.to_string(),
                rationale: "canned".to_string(),
            })
        }
    }

    #[test]
    fn providers_are_object_safe() {
        let provider: Box<dyn SuggestionProvider> = Box::new(CannedProvider("crane"));
        let suggestion = provider.suggest(&[], &[], 5, "en").unwrap();
        assert_eq!(suggestion.word, "crane");
    }
}
