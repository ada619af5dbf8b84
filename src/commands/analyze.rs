//! Word analysis command
//!
//! Reports the information metrics a single guess would achieve against the
//! current possible-secrets list.

use crate::core::{SolverError, Word};
use crate::prior::Prior;
use crate::solver::calculate_metrics;

/// Metrics for one analyzed word
pub struct AnalysisResult {
    pub word: String,
    /// Expected information gain in bits
    pub entropy: f64,
    /// Expected candidates remaining after the guess
    pub expected_remaining: f64,
    /// Worst-case candidates remaining
    pub max_partition: usize,
    /// Probability the word is itself the secret
    pub p_correct: f64,
    /// Size of the possibility set analyzed against
    pub possibilities: usize,
}

/// Analyze a word against the prior-weighted possibility set
///
/// # Errors
/// Returns [`SolverError`] when the word is malformed.
pub fn analyze_word(
    word: &str,
    answers: &[Word],
    prior: &Prior,
) -> Result<AnalysisResult, SolverError> {
    let guess = Word::new(word)?;
    let possibilities = prior.possible_secrets(answers);
    let metrics = calculate_metrics(&guess, &possibilities, prior);

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        entropy: metrics.entropy,
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        p_correct: metrics.p_correct,
        possibilities: possibilities.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn analyze_reports_metrics() {
        let answers = words(&["irate", "crate", "grate", "plate"]);
        let prior = Prior::uniform(&answers);

        let result = analyze_word("crate", &answers, &prior).unwrap();
        assert_eq!(result.word, "crate");
        assert_eq!(result.possibilities, 4);
        assert!(result.entropy > 1.0);
        assert!((result.p_correct - 0.25).abs() < 1e-9);
        assert!(result.max_partition <= 4);
    }

    #[test]
    fn analyze_normalizes_case() {
        let answers = words(&["irate", "crate"]);
        let prior = Prior::uniform(&answers);

        let result = analyze_word("CRATE", &answers, &prior).unwrap();
        assert_eq!(result.word, "crate");
    }

    #[test]
    fn analyze_rejects_malformed_words() {
        let answers = words(&["irate"]);
        let prior = Prior::uniform(&answers);

        assert!(analyze_word("xy", &answers, &prior).is_err());
        assert!(analyze_word("cr4te", &answers, &prior).is_err());
    }
}
