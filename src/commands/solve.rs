//! Self-play command
//!
//! Solves a known target word and records the solution path.

use crate::core::{Feedback, SolverError, Word};
use crate::prior::Prior;
use crate::session::{GameSession, GameStatus, SessionConfig};
use crate::solver::{OptimizerConfig, SearchBudget, calculate_entropy};

/// Configuration for solving a word
pub struct SolveConfig {
    /// The target word to solve
    pub target: String,
    /// Guess selection knobs
    pub optimizer: OptimizerConfig,
    /// When set, use the brute-force search with this many top picks
    pub brute_force_picks: Option<usize>,
    /// Restrict the guess pool to feedback-consistent words
    pub hard_mode: bool,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: String) -> Self {
        Self {
            target,
            optimizer: OptimizerConfig::default(),
            brute_force_picks: None,
            hard_mode: false,
        }
    }
}

/// One turn of the solution path
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected information gain of the guess, when more than one candidate
    /// remained
    pub entropy: Option<f64>,
}

/// The recorded solution path
pub struct SolveResult {
    pub target: String,
    pub success: bool,
    pub steps: Vec<GuessStep>,
}

/// Solve a target word by self-play
///
/// # Errors
/// Returns [`SolverError`] when the target is not a valid word or the
/// candidate set empties mid-game (a dictionary gap).
pub fn solve_word(
    config: &SolveConfig,
    allowed: &[Word],
    answers: &[Word],
    prior: &Prior,
) -> Result<SolveResult, SolverError> {
    let target = Word::new(config.target.as_str())?;

    let session_config = SessionConfig {
        hard_mode: config.hard_mode,
        ..SessionConfig::default()
    };
    let mut session = GameSession::with_secret(
        allowed.to_vec(),
        answers.to_vec(),
        prior.clone(),
        session_config,
        target,
    )?;

    let mut steps = Vec::new();
    while session.status() == GameStatus::InProgress {
        let candidates_before = session.candidates().len();

        let guess = match config.brute_force_picks {
            Some(picks) => session.brute_force_guess(picks, SearchBudget::default())?,
            None => session.next_guess(&config.optimizer)?,
        };

        let entropy = if candidates_before > 1 {
            Some(calculate_entropy(&guess, &session.candidates(), prior))
        } else {
            None
        };

        let feedback = session.play(&guess)?;
        let candidates_after = session.candidates().len();

        steps.push(GuessStep {
            word: guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after,
            entropy,
        });
    }

    Ok(SolveResult {
        target: config.target.clone(),
        success: session.status() == GameStatus::Solved,
        steps,
    })
}
