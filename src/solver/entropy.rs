//! Prior-weighted pattern distributions and Shannon entropy
//!
//! Given a guess and the current possibility set, partitions the possibilities
//! by the pattern the guess would produce against each, weighted by prior
//! mass, and measures the expected information gain of observing the outcome.

use crate::core::{Pattern, Word};
use crate::prior::Prior;
use rustc_hash::FxHashMap;

/// Metrics for evaluating a single guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy of the weighted pattern partition, in bits
    pub entropy: f64,
    /// Expected number of remaining possibilities after this guess
    pub expected_remaining: f64,
    /// Largest partition bucket (worst-case remaining possibilities)
    pub max_partition: usize,
    /// Probability that the guess itself is the secret
    pub p_correct: f64,
}

/// Prior mass per pattern the guess would produce over the possibilities
///
/// Zero-weight possibilities contribute nothing; the table is ephemeral and
/// recomputed per evaluation.
#[must_use]
pub fn pattern_distribution(
    guess: &Word,
    possibilities: &[&Word],
    prior: &Prior,
) -> FxHashMap<Pattern, f64> {
    let mut mass: FxHashMap<Pattern, f64> = FxHashMap::default();
    for &secret in possibilities {
        let weight = prior.weight(secret);
        if weight <= 0.0 {
            continue;
        }
        *mass.entry(Pattern::score(guess, secret)).or_insert(0.0) += weight;
    }
    mass
}

/// Shannon entropy of a weighted partition
///
/// H = -Σ (w_p / W) · log₂(w_p / W) over buckets p with mass w_p and total
/// mass W. Zero for a single-bucket (certain) outcome, maximal for a uniform
/// split.
#[must_use]
pub fn weighted_entropy(distribution: &FxHashMap<Pattern, f64>) -> f64 {
    let total: f64 = distribution.values().sum();
    if total <= 0.0 {
        return 0.0;
    }

    distribution
        .values()
        .filter(|&&mass| mass > 0.0)
        .map(|&mass| {
            let p = mass / total;
            -p * p.log2()
        })
        .sum()
}

/// Expected information gain of a guess, in bits
#[must_use]
pub fn calculate_entropy(guess: &Word, possibilities: &[&Word], prior: &Prior) -> f64 {
    if possibilities.is_empty() {
        return 0.0;
    }
    weighted_entropy(&pattern_distribution(guess, possibilities, prior))
}

/// Full metrics for a guess: entropy, expected remaining, worst case,
/// and the chance the guess is itself the secret
#[must_use]
pub fn calculate_metrics(guess: &Word, possibilities: &[&Word], prior: &Prior) -> GuessMetrics {
    if possibilities.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            p_correct: 0.0,
        };
    }

    let mut buckets: FxHashMap<Pattern, (f64, usize)> = FxHashMap::default();
    let mut total_mass = 0.0;
    for &secret in possibilities {
        let weight = prior.weight(secret);
        if weight <= 0.0 {
            continue;
        }
        total_mass += weight;
        let entry = buckets.entry(Pattern::score(guess, secret)).or_insert((0.0, 0));
        entry.0 += weight;
        entry.1 += 1;
    }

    if total_mass <= 0.0 {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
            p_correct: 0.0,
        };
    }

    let mut entropy = 0.0;
    let mut expected_remaining = 0.0;
    let mut max_partition = 0;
    for &(mass, count) in buckets.values() {
        let p = mass / total_mass;
        entropy -= p * p.log2();
        expected_remaining += p * count as f64;
        max_partition = max_partition.max(count);
    }

    let p_correct = if possibilities.iter().any(|w| w.text() == guess.text()) {
        prior.weight(guess) / total_mass
    } else {
        0.0
    };

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
        p_correct,
    }
}
