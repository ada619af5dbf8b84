//! Likelihood weighting over candidate secrets
//!
//! A [`Prior`] maps each word to a non-negative weight used when partitioning
//! possibilities by pattern. Zero-weight words are impossible as secrets but
//! stay legal as guesses. Priors are read-only after construction and safe to
//! share across sessions.

use crate::core::{SolverError, Word};
use rustc_hash::FxHashMap;

/// Which reference word list to draw from
///
/// Wordle historically distinguishes the full guess-allowed list from the
/// restricted list of words that can actually be answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordListMode {
    /// Every guessable word
    Allowed,
    /// Only words eligible as secrets
    Answers,
}

impl WordListMode {
    /// Parse a mode name as given on the command line
    ///
    /// # Errors
    /// Returns [`SolverError::UnsupportedMode`] for anything other than
    /// `all`/`allowed` or `answers`.
    pub fn from_name(name: &str) -> Result<Self, SolverError> {
        match name {
            "all" | "allowed" => Ok(Self::Allowed),
            "answers" => Ok(Self::Answers),
            other => Err(SolverError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Width of the number line the ranked list is squashed onto
const SIGMOID_WIDTH: f64 = 10.0;

/// Relative likelihood of each word being the secret
#[derive(Debug, Clone, Default)]
pub struct Prior {
    weights: FxHashMap<String, f64>,
}

impl Prior {
    /// Uniform weight over the given words
    ///
    /// Words outside the list get weight zero.
    #[must_use]
    pub fn uniform(words: &[Word]) -> Self {
        let weights = words
            .iter()
            .map(|w| (w.text().to_string(), 1.0))
            .collect();
        Self { weights }
    }

    /// The "true distribution": uniform over the official answer list only
    ///
    /// Equivalent to [`Prior::uniform`] over the answers; named separately
    /// because scoring modes select it explicitly.
    #[must_use]
    pub fn answer_list(answers: &[Word]) -> Self {
        Self::uniform(answers)
    }

    /// Frequency-weighted prior
    ///
    /// Words are ranked by raw corpus frequency and the rank is squashed
    /// through a logistic curve placed so that roughly the `n_common` most
    /// frequent words carry most of the mass. Raw counts span orders of
    /// magnitude and would otherwise drown the tail entirely. Words missing
    /// from the table rank lowest.
    #[must_use]
    pub fn from_frequencies(
        words: &[Word],
        frequencies: &FxHashMap<String, f64>,
        n_common: usize,
    ) -> Self {
        let mut ranked: Vec<&Word> = words.iter().collect();
        ranked.sort_by(|a, b| {
            let fa = frequencies.get(a.text()).copied().unwrap_or(0.0);
            let fb = frequencies.get(b.text()).copied().unwrap_or(0.0);
            fa.total_cmp(&fb).then_with(|| a.text().cmp(b.text()))
        });

        let n = ranked.len();
        let center = SIGMOID_WIDTH * (n_common as f64 / n.max(1) as f64 - 0.5);

        let mut weights = FxHashMap::default();
        for (i, word) in ranked.iter().enumerate() {
            let t = if n > 1 {
                i as f64 / (n - 1) as f64
            } else {
                0.5
            };
            let x = center + SIGMOID_WIDTH * (t - 0.5);
            weights.insert(word.text().to_string(), sigmoid(x));
        }
        Self { weights }
    }

    /// Weight of a word; zero when the word is not a possible secret
    #[inline]
    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        self.weights.get(word.text()).copied().unwrap_or(0.0)
    }

    /// Whether the word carries any probability mass
    #[inline]
    #[must_use]
    pub fn is_possible(&self, word: &Word) -> bool {
        self.weight(word) > 0.0
    }

    /// Words from `words` that carry probability mass, in input order
    #[must_use]
    pub fn possible_secrets<'a>(&self, words: &'a [Word]) -> Vec<&'a Word> {
        words.iter().filter(|w| self.is_possible(w)).collect()
    }

    /// Total mass over a set of words
    #[must_use]
    pub fn total_mass(&self, words: &[&Word]) -> f64 {
        words.iter().map(|w| self.weight(w)).sum()
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
