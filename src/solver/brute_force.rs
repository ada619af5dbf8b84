//! Depth-limited expected-turns search
//!
//! An exhaustive expected-value search over a pruned candidate frontier: only
//! the top single-ply guesses are explored, and recursion stops at a fixed
//! depth. The pruning is a deliberate cost/quality tradeoff — the full guess
//! space at full depth is intractable, and the single-ply ranking is already
//! a strong heuristic for which guesses deserve exact evaluation.

use super::entropy::calculate_metrics;
use crate::core::{Pattern, SolverError, Word};
use crate::prior::Prior;
use rustc_hash::FxHashMap;

/// How many plies below the evaluated guess the recursion explores
const SEARCH_DEPTH: u32 = 2;

/// How many follow-up guesses each recursive level considers
const FOLLOWUP_PICKS: usize = 3;

/// Node-count budget for the brute-force search
///
/// The search counts one node per evaluated guess; once the budget is spent
/// it abandons exact evaluation and falls back to the best single-ply
/// candidate rather than blocking indefinitely.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    /// Maximum number of guess evaluations before falling back
    pub max_nodes: usize,
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self { max_nodes: 100_000 }
    }
}

/// Pick the guess minimizing expected total turns to solve
///
/// Takes the `n_top_picks` single-ply-best guesses (entropy plus the
/// possible-secret bonus) and, for each, simulates every pattern outcome and
/// recursively evaluates the expected number of turns to finish from the
/// narrowed possibility set. Ties break lexicographically.
///
/// # Errors
/// Returns [`SolverError::NoCandidatesRemaining`] when `possibilities` is
/// empty.
pub fn brute_force_optimal_guess<'a>(
    allowed_guesses: &'a [Word],
    possibilities: &[&Word],
    prior: &Prior,
    n_top_picks: usize,
    budget: SearchBudget,
) -> Result<&'a Word, SolverError> {
    if possibilities.is_empty() {
        return Err(SolverError::NoCandidatesRemaining);
    }
    debug_assert!(
        !allowed_guesses.is_empty(),
        "guess pool must not be empty"
    );

    let ranked = rank_by_single_ply(allowed_guesses, possibilities, prior);
    let fallback = ranked
        .first()
        .map(|&(index, _)| &allowed_guesses[index])
        .ok_or(SolverError::NoCandidatesRemaining)?;

    let mut nodes = 0usize;
    let mut best: Option<(&Word, f64)> = None;

    for &(index, _) in ranked.iter().take(n_top_picks.max(1)) {
        let guess = &allowed_guesses[index];
        let Some(turns) = expected_turns(guess, possibilities, prior, SEARCH_DEPTH, &mut nodes, budget)
        else {
            // Budget exhausted mid-search: the single-ply leader is the
            // only answer that is still justified
            return Ok(fallback);
        };

        let better = match best {
            None => true,
            Some((current, current_turns)) => {
                turns < current_turns
                    || (turns == current_turns && guess.text() < current.text())
            }
        };
        if better {
            best = Some((guess, turns));
        }
    }

    Ok(best.map_or(fallback, |(word, _)| word))
}

/// Single-ply ranking shared with the optimizer: entropy + win bonus,
/// lexicographic on ties
fn rank_by_single_ply(
    allowed_guesses: &[Word],
    possibilities: &[&Word],
    prior: &Prior,
) -> Vec<(usize, f64)> {
    let mut ranked: Vec<(usize, f64)> = allowed_guesses
        .iter()
        .enumerate()
        .map(|(index, guess)| {
            let metrics = calculate_metrics(guess, possibilities, prior);
            (index, metrics.entropy + metrics.p_correct)
        })
        .collect();
    ranked.sort_by(|&(ia, sa), &(ib, sb)| {
        sb.total_cmp(&sa)
            .then_with(|| allowed_guesses[ia].text().cmp(allowed_guesses[ib].text()))
    });
    ranked
}

/// Expected total turns to solve when opening with `guess`
///
/// 1 for the guess itself, plus the mass-weighted expected turns to finish
/// from each non-winning outcome. Returns `None` once the node budget is
/// spent.
fn expected_turns(
    guess: &Word,
    possibilities: &[&Word],
    prior: &Prior,
    depth: u32,
    nodes: &mut usize,
    budget: SearchBudget,
) -> Option<f64> {
    *nodes += 1;
    if *nodes > budget.max_nodes {
        return None;
    }

    let mut buckets: FxHashMap<Pattern, (f64, Vec<&Word>)> = FxHashMap::default();
    let mut total_mass = 0.0;
    for &secret in possibilities {
        let weight = prior.weight(secret);
        if weight <= 0.0 {
            continue;
        }
        total_mass += weight;
        let entry = buckets
            .entry(Pattern::score(guess, secret))
            .or_insert_with(|| (0.0, Vec::new()));
        entry.0 += weight;
        entry.1.push(secret);
    }
    if total_mass <= 0.0 {
        return Some(1.0);
    }

    let mut turns = 1.0;
    for (pattern, (mass, members)) in buckets {
        if pattern.is_perfect() {
            continue;
        }
        let remaining = turns_to_finish(&members, prior, depth, nodes, budget)?;
        turns += (mass / total_mass) * remaining;
    }
    Some(turns)
}

/// Expected turns to finish from a narrowed possibility set
fn turns_to_finish(
    possibilities: &[&Word],
    prior: &Prior,
    depth: u32,
    nodes: &mut usize,
    budget: SearchBudget,
) -> Option<f64> {
    match possibilities.len() {
        0 => return Some(0.0),
        1 => return Some(1.0),
        _ => {}
    }

    if depth == 0 {
        // Optimistic estimate at the horizon: guess candidates one by one,
        // each equally likely
        return Some(2.0 - 1.0 / possibilities.len() as f64);
    }

    // Recurse only through the most promising follow-ups, drawn from the
    // remaining candidates themselves so a follow-up can also win outright
    let owned: Vec<Word> = possibilities.iter().map(|&w| w.clone()).collect();
    let ranked = rank_by_single_ply(&owned, possibilities, prior);

    let mut best: Option<f64> = None;
    for &(index, _) in ranked.iter().take(FOLLOWUP_PICKS) {
        let turns = expected_turns(&owned[index], possibilities, prior, depth - 1, nodes, budget)?;
        best = Some(best.map_or(turns, |b: f64| b.min(turns)));
    }
    best.map_or(Some(2.0 - 1.0 / possibilities.len() as f64), Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn empty_possibilities_is_an_error() {
        let allowed = words(&["crane"]);
        let prior = Prior::uniform(&allowed);

        let result = brute_force_optimal_guess(&allowed, &[], &prior, 5, SearchBudget::default());
        assert_eq!(result.unwrap_err(), SolverError::NoCandidatesRemaining);
    }

    #[test]
    fn single_possibility_is_guessed_directly() {
        let allowed = words(&["crane", "crate", "slate"]);
        let candidates = words(&["crate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let best =
            brute_force_optimal_guess(&allowed, &refs, &prior, 3, SearchBudget::default()).unwrap();
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn symmetric_candidates_break_ties_lexicographically() {
        // All four differ only in the first letter: every choice has the
        // same expected turns, so the lexicographic rule must decide
        let list = words(&["breed", "creed", "freed", "greed"]);
        let refs: Vec<&Word> = list.iter().collect();
        let prior = Prior::uniform(&list);

        let best =
            brute_force_optimal_guess(&list, &refs, &prior, 4, SearchBudget::default()).unwrap();
        assert_eq!(best.text(), "breed");
    }

    #[test]
    fn discriminating_guess_lowers_expected_turns() {
        let allowed = words(&["fuzzy", "crate"]);
        let candidates = words(&["irate", "crate", "grate", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let best =
            brute_force_optimal_guess(&allowed, &refs, &prior, 2, SearchBudget::default()).unwrap();
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn exhausted_budget_falls_back_to_single_ply_best() {
        let allowed = words(&["fuzzy", "crate"]);
        let candidates = words(&["irate", "crate", "grate", "plate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        // A one-node budget cannot finish any evaluation
        let tiny = SearchBudget { max_nodes: 1 };
        let best = brute_force_optimal_guess(&allowed, &refs, &prior, 2, tiny).unwrap();

        // Fallback must be the single-ply leader, never an arbitrary word
        assert_eq!(best.text(), "crate");
    }

    #[test]
    fn deterministic_across_calls() {
        let allowed = words(&["crane", "slate", "irate", "trace"]);
        let candidates = words(&["irate", "crate", "grate", "plate", "trace"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let prior = Prior::uniform(&candidates);

        let first =
            brute_force_optimal_guess(&allowed, &refs, &prior, 3, SearchBudget::default()).unwrap();
        let second =
            brute_force_optimal_guess(&allowed, &refs, &prior, 3, SearchBudget::default()).unwrap();
        assert_eq!(first.text(), second.text());
    }

    #[test]
    fn expected_turns_single_candidate_is_one_guess() {
        let list = words(&["crate"]);
        let refs: Vec<&Word> = list.iter().collect();
        let prior = Prior::uniform(&list);

        let mut nodes = 0;
        let turns = expected_turns(
            &list[0],
            &refs,
            &prior,
            SEARCH_DEPTH,
            &mut nodes,
            SearchBudget::default(),
        )
        .unwrap();
        assert!((turns - 1.0).abs() < 1e-9);
    }

    #[test]
    fn expected_turns_two_indistinguishable_candidates() {
        // Guessing one of two equally likely candidates: half the time it is
        // right (1 turn), half the time one more guess is needed (2 turns)
        let list = words(&["breed", "creed"]);
        let refs: Vec<&Word> = list.iter().collect();
        let prior = Prior::uniform(&list);

        let mut nodes = 0;
        let turns = expected_turns(
            &list[0],
            &refs,
            &prior,
            SEARCH_DEPTH,
            &mut nodes,
            SearchBudget::default(),
        )
        .unwrap();
        assert!((turns - 1.5).abs() < 1e-9);
    }
}
