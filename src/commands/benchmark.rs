//! Benchmark command
//!
//! Runs the solver over a sample of target words and aggregates statistics.

use crate::core::Word;
use crate::prior::Prior;
use crate::session::{GameSession, GameStatus, SessionConfig};
use crate::solver::OptimizerConfig;
use indicatif::ProgressBar;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregate result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of words solved in that many guesses
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` random target words from the answer list
#[must_use]
pub fn sample_targets(answers: &[Word], count: usize) -> Vec<Word> {
    answers
        .choose_multiple(&mut rand::rng(), count.min(answers.len()))
        .cloned()
        .collect()
}

/// Run the solver against each target word and collect statistics
///
/// Shows a progress bar while running; pass `show_progress = false` in
/// non-interactive contexts.
#[must_use]
pub fn run_benchmark(
    allowed: &[Word],
    answers: &[Word],
    prior: &Prior,
    optimizer: &OptimizerConfig,
    targets: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let progress = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for target in targets {
        let guesses = play_out(allowed, answers, prior, optimizer, target);

        if let Some(guesses) = guesses {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Number of guesses used to solve the target, or None on failure
fn play_out(
    allowed: &[Word],
    answers: &[Word],
    prior: &Prior,
    optimizer: &OptimizerConfig,
    target: &Word,
) -> Option<usize> {
    let mut session = GameSession::with_secret(
        allowed.to_vec(),
        answers.to_vec(),
        prior.clone(),
        SessionConfig::default(),
        target.clone(),
    )
    .ok()?;

    while session.status() == GameStatus::InProgress {
        let guess = session.next_guess(optimizer).ok()?;
        session.play(&guess).ok()?;
    }

    if session.status() == GameStatus::Solved {
        Some(session.history().len())
    } else {
        None
    }
}
