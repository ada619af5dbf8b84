//! Expected-information guess selection
//!
//! Evaluates every allowed guess against the current possibility set and
//! picks the one maximizing expected information gain, optionally blended
//! with a preference for guesses that might themselves be the secret, and
//! optionally refined by one extra ply of simulated lookahead.

use super::entropy::{calculate_entropy, calculate_metrics, pattern_distribution};
use crate::core::{Pattern, SolverError, Word};
use crate::prior::Prior;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Knobs for [`optimal_guess`]
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Refine the top single-ply candidates with one more ply of lookahead
    pub look_two_ahead: bool,
    /// Score by entropy alone, ignoring whether the guess could win outright
    pub purely_maximize_information: bool,
    /// Override the prior with uniform weight across the possibilities
    pub optimize_for_uniform_distribution: bool,
    /// How many single-ply leaders get the second-ply treatment
    pub top_picks_two_ahead: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            look_two_ahead: false,
            purely_maximize_information: false,
            optimize_for_uniform_distribution: false,
            top_picks_two_ahead: 8,
        }
    }
}

/// Pick the best next guess from `allowed_guesses`
///
/// Each guess is scored by the Shannon entropy of the pattern partition it
/// induces over `possibilities` under `prior`. Unless
/// `purely_maximize_information` is set, the score also adds the probability
/// that the guess is itself the secret: a guaranteed win this turn outweighs
/// a strict entropy tie. Ties break lexicographically on the word, so
/// identical inputs always return the same guess.
///
/// Cost is O(|allowed| × |possibilities|) pattern computations, parallelized
/// over the guess pool; two-ply lookahead multiplies that by the bucket count
/// for the top candidates and is opt-in.
///
/// # Errors
/// Returns [`SolverError::NoCandidatesRemaining`] when `possibilities` is
/// empty: no guess can be justified from an unsatisfiable state.
/// `allowed_guesses` must be non-empty (caller responsibility).
pub fn optimal_guess<'a>(
    allowed_guesses: &'a [Word],
    possibilities: &[&Word],
    prior: &Prior,
    config: &OptimizerConfig,
) -> Result<&'a Word, SolverError> {
    if possibilities.is_empty() {
        return Err(SolverError::NoCandidatesRemaining);
    }
    debug_assert!(
        !allowed_guesses.is_empty(),
        "guess pool must not be empty"
    );

    // Uniform override replaces the prior before any scoring
    let uniform_storage;
    let prior = if config.optimize_for_uniform_distribution {
        let owned: Vec<Word> = possibilities.iter().map(|&w| w.clone()).collect();
        uniform_storage = Prior::uniform(&owned);
        &uniform_storage
    } else {
        prior
    };

    let mut ranked = rank_single_ply(allowed_guesses, possibilities, prior, config);

    if config.look_two_ahead && possibilities.len() > 1 {
        let depth = config.top_picks_two_ahead.min(ranked.len());
        ranked.truncate(depth);

        let rescored: Vec<(usize, f64)> = ranked
            .par_iter()
            .map(|&(index, score)| {
                let second = expected_second_ply_entropy(
                    &allowed_guesses[index],
                    possibilities,
                    prior,
                    allowed_guesses,
                );
                (index, score + second)
            })
            .collect();
        ranked = rescored;
        sort_ranked(&mut ranked, allowed_guesses);
    }

    ranked
        .first()
        .map(|&(index, _)| &allowed_guesses[index])
        .ok_or(SolverError::NoCandidatesRemaining)
}

/// Score every allowed guess one ply deep, best first
fn rank_single_ply(
    allowed_guesses: &[Word],
    possibilities: &[&Word],
    prior: &Prior,
    config: &OptimizerConfig,
) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = allowed_guesses
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            let metrics = calculate_metrics(guess, possibilities, prior);
            let score = if config.purely_maximize_information {
                metrics.entropy
            } else {
                metrics.entropy + metrics.p_correct
            };
            (index, score)
        })
        .collect();
    sort_ranked(&mut ranked, allowed_guesses);
    ranked
}

/// Order by score descending, then lexicographically for determinism
fn sort_ranked(ranked: &mut [(usize, f64)], allowed_guesses: &[Word]) {
    ranked.sort_by(|&(ia, sa), &(ib, sb)| {
        sb.total_cmp(&sa)
            .then_with(|| allowed_guesses[ia].text().cmp(allowed_guesses[ib].text()))
    });
}

/// Mass-weighted best second-ply entropy over the outcomes of `guess`
///
/// Simulates each pattern the guess could produce, narrows the possibility
/// set accordingly, and asks what the best follow-up guess would learn.
fn expected_second_ply_entropy(
    guess: &Word,
    possibilities: &[&Word],
    prior: &Prior,
    allowed_guesses: &[Word],
) -> f64 {
    let distribution = pattern_distribution(guess, possibilities, prior);
    let total: f64 = distribution.values().sum();
    if total <= 0.0 {
        return 0.0;
    }

    // Bucket members, not just masses, so each branch can be narrowed
    let mut buckets: FxHashMap<Pattern, Vec<&Word>> = FxHashMap::default();
    for &secret in possibilities {
        if prior.weight(secret) > 0.0 {
            buckets
                .entry(Pattern::score(guess, secret))
                .or_default()
                .push(secret);
        }
    }

    buckets
        .into_iter()
        .map(|(pattern, members)| {
            if pattern.is_perfect() || members.len() <= 1 {
                return 0.0;
            }
            let mass = distribution.get(&pattern).copied().unwrap_or(0.0);
            let best_followup = allowed_guesses
                .par_iter()
                .map(|next| calculate_entropy(next, &members, prior))
                .max_by(f64::total_cmp)
                .unwrap_or(0.0);
            (mass / total) * best_followup
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn empty_possibilities_is_an_error() {
        let allowed = words(&["crane", "slate"]);
        let prior = Prior::uniform(&allowed);

        let result = optimal_guess(&allowed, &[], &prior, &OptimizerConfig::default());
        assert_eq!(result.unwrap_err(), SolverError::NoCandidatesRemaining);
    }

    #[test]
    fn prefers_discriminating_guess() {
        let allowed = words(&["fuzzy", "crate"]);
        let candidates = words(&["irate", "crate", "grate", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let best = optimal_guess(&allowed, &refs, &prior, &OptimizerConfig::default()).unwrap();
        // fuzzy distinguishes nothing; crate splits every candidate apart
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn deterministic_across_calls() {
        let allowed = words(&["crane", "slate", "irate", "trace", "react"]);
        let candidates = words(&["irate", "crate", "grate", "plate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);
        let config = OptimizerConfig::default();

        let first = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
        for _ in 0..3 {
            let again = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
            assert_eq!(first.text(), again.text());
        }
    }

    #[test]
    fn winning_guess_beats_strict_entropy_tie() {
        // One possibility left: every guess has zero entropy, but only the
        // candidate itself can win this turn
        let allowed = words(&["crane", "crate", "slate"]);
        let candidates = words(&["crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let best = optimal_guess(&allowed, &refs, &prior, &OptimizerConfig::default()).unwrap();
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn pure_information_ignores_winning_bonus() {
        let allowed = words(&["crane", "crate", "slate"]);
        let candidates = words(&["crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let config = OptimizerConfig {
            purely_maximize_information: true,
            ..OptimizerConfig::default()
        };
        let best = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
        // All-zero entropy everywhere; the lexicographic tie-break decides
        assert_eq!(best.text(), "crane");
    }

    #[test]
    fn uniform_override_neutralizes_a_skewed_prior() {
        let allowed = words(&["crane", "slate", "irate"]);
        let candidates = words(&["irate", "crate", "grate", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();

        let mut freqs = FxHashMap::default();
        freqs.insert("irate".to_string(), 1_000_000.0);
        freqs.insert("crate".to_string(), 1.0);
        let skewed = Prior::from_frequencies(&candidates, &freqs, 1);
        let uniform = Prior::uniform(&candidates);

        let config = OptimizerConfig {
            optimize_for_uniform_distribution: true,
            ..OptimizerConfig::default()
        };

        let overridden = optimal_guess(&allowed, &refs, &skewed, &config).unwrap();
        let baseline =
            optimal_guess(&allowed, &refs, &uniform, &OptimizerConfig::default()).unwrap();
        assert_eq!(overridden.text(), baseline.text());
    }

    #[test]
    fn two_ply_lookahead_returns_a_valid_guess() {
        let allowed = words(&["crane", "slate", "irate", "trace"]);
        let candidates = words(&["irate", "crate", "grate", "plate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let config = OptimizerConfig {
            look_two_ahead: true,
            top_picks_two_ahead: 3,
            ..OptimizerConfig::default()
        };

        let best = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
        assert!(allowed.iter().any(|w| w.text() == best.text()));

        // Lookahead keeps determinism
        let again = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
        assert_eq!(best.text(), again.text());
    }

    #[test]
    fn single_possibility_short_circuits_lookahead() {
        let allowed = words(&["crane", "crate"]);
        let candidates = words(&["crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let config = OptimizerConfig {
            look_two_ahead: true,
            ..OptimizerConfig::default()
        };
        let best = optimal_guess(&allowed, &refs, &prior, &config).unwrap();
        assert_eq!(best.text(), "crate");
    }
}
