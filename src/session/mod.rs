//! Game session state
//!
//! A [`GameSession`] drives the per-turn loop: accept a guess, score it
//! against the secret (or accept externally supplied feedback), fold the
//! feedback into the constraint store, refilter the candidate set, and
//! propose the next guess. Each session owns its own store and history;
//! word lists and the prior are read-only shared inputs.

mod suggestion;

pub use suggestion::{Suggestion, SuggestionProvider};

use crate::constraints::ConstraintStore;
use crate::core::{Feedback, SolverError, WORD_LEN, Word};
use crate::prior::Prior;
use crate::solver::{OptimizerConfig, SearchBudget, brute_force_optimal_guess, optimal_guess};

/// Default attempt budget
pub const MAX_ATTEMPTS: usize = 6;

/// Precomputed opening guess, used when the history is empty
///
/// Scanning the full pool on turn one always lands here anyway; hardcoding
/// it skips the most expensive evaluation of the game.
pub const OPENER: &str = "salet";

/// Where a session currently stands
///
/// Terminal states are absorbing: once `Solved` or `Exhausted`, no further
/// guesses are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Attempts remain and the secret is unsolved
    InProgress,
    /// The secret was fully matched
    Solved,
    /// The attempt budget ran out
    Exhausted,
}

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Language tag; only `en` is supported
    pub language: String,
    /// Attempt budget, typically 6
    pub max_attempts: usize,
    /// Restrict the guess pool itself to words consistent with all feedback
    pub hard_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_attempts: MAX_ATTEMPTS,
            hard_mode: false,
        }
    }
}

/// A guess proposed for the next turn
#[derive(Debug, Clone)]
pub struct ProposedGuess {
    /// The word to play
    pub word: Word,
    /// Provider rationale, when the proposal came from one
    pub rationale: Option<String>,
    /// Whether an external provider supplied the word
    pub from_provider: bool,
}

/// One Wordle game in progress
#[derive(Debug, Clone)]
pub struct GameSession {
    allowed: Vec<Word>,
    answers: Vec<Word>,
    prior: Prior,
    secret: Option<Word>,
    history: Vec<(Word, Feedback)>,
    store: ConstraintStore,
    status: GameStatus,
    config: SessionConfig,
}

impl GameSession {
    /// Create a feedback-driven session (no known secret)
    ///
    /// `allowed` is the guess pool, `answers` the possible-secrets list.
    ///
    /// # Errors
    /// Returns [`SolverError::UnsupportedLanguage`] for a language tag other
    /// than `en`.
    pub fn new(
        allowed: Vec<Word>,
        answers: Vec<Word>,
        prior: Prior,
        config: SessionConfig,
    ) -> Result<Self, SolverError> {
        if config.language != "en" {
            return Err(SolverError::UnsupportedLanguage(config.language));
        }
        Ok(Self {
            allowed,
            answers,
            prior,
            secret: None,
            history: Vec::new(),
            store: ConstraintStore::new(),
            status: GameStatus::InProgress,
            config,
        })
    }

    /// Create a self-play session that scores guesses against `secret`
    ///
    /// # Errors
    /// Returns [`SolverError::UnsupportedLanguage`] for a language tag other
    /// than `en`.
    pub fn with_secret(
        allowed: Vec<Word>,
        answers: Vec<Word>,
        prior: Prior,
        config: SessionConfig,
        secret: Word,
    ) -> Result<Self, SolverError> {
        let mut session = Self::new(allowed, answers, prior, config)?;
        session.secret = Some(secret);
        Ok(session)
    }

    /// Current status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Guesses played so far with their feedback
    #[must_use]
    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    /// Attempts left before the session exhausts
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// The accumulated constraint store
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.store
    }

    /// Words still consistent with every fact seen so far
    ///
    /// Recomputed from the full answer list each call (never patched
    /// incrementally), restricted to words the prior admits as secrets.
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        self.answers
            .iter()
            .filter(|w| self.prior.is_possible(w) && self.store.is_valid(w))
            .collect()
    }

    /// Play a guess against the configured secret
    ///
    /// Scores the guess, folds the feedback into the store, and advances the
    /// state machine.
    ///
    /// # Errors
    /// - [`SolverError::SessionFinished`] once the session is terminal
    /// - [`SolverError::UnsupportedMode`] when the session has no secret
    ///   (feedback-driven sessions take [`GameSession::accept_feedback`])
    pub fn play(&mut self, guess: &Word) -> Result<Feedback, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::SessionFinished);
        }
        let Some(secret) = &self.secret else {
            return Err(SolverError::UnsupportedMode(
                "self-play without a secret".to_string(),
            ));
        };

        let feedback = Feedback::score(guess, secret);
        self.record(guess.clone(), feedback);
        Ok(feedback)
    }

    /// Accept externally supplied feedback for a guess
    ///
    /// Used when a human or external game reports the outcome. The feedback
    /// is already validated by construction ([`Feedback::parse`] rejects
    /// malformed input before anything reaches the store).
    ///
    /// # Errors
    /// Returns [`SolverError::SessionFinished`] once the session is terminal.
    pub fn accept_feedback(&mut self, guess: Word, feedback: Feedback) -> Result<(), SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::SessionFinished);
        }
        self.record(guess, feedback);
        Ok(())
    }

    fn record(&mut self, guess: Word, feedback: Feedback) {
        self.store.apply(&guess, &feedback);
        self.history.push((guess, feedback));

        if feedback.is_solved() {
            self.status = GameStatus::Solved;
        } else if self.history.len() >= self.config.max_attempts {
            self.status = GameStatus::Exhausted;
        }
    }

    /// Propose the next guess with the expected-information optimizer
    ///
    /// Turn one returns the precomputed opener when the pool contains it.
    /// With a single candidate left, that candidate is proposed directly.
    /// In hard mode the guess pool is first narrowed to words consistent
    /// with all feedback so far.
    ///
    /// # Errors
    /// - [`SolverError::SessionFinished`] once the session is terminal
    /// - [`SolverError::NoCandidatesRemaining`] when no word satisfies the
    ///   accumulated constraints
    pub fn next_guess(&self, config: &OptimizerConfig) -> Result<Word, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::SessionFinished);
        }

        if self.history.is_empty() {
            if let Some(opener) = self.allowed.iter().find(|w| w.text() == OPENER) {
                return Ok(opener.clone());
            }
        }

        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(SolverError::NoCandidatesRemaining);
        }
        if candidates.len() == 1 {
            return Ok(candidates[0].clone());
        }

        if self.config.hard_mode {
            let pool = self.hard_mode_pool();
            optimal_guess(&pool, &candidates, &self.prior, config).map(Clone::clone)
        } else {
            optimal_guess(&self.allowed, &candidates, &self.prior, config).map(Clone::clone)
        }
    }

    /// Propose the next guess with the brute-force expected-turns search
    ///
    /// # Errors
    /// Same conditions as [`GameSession::next_guess`].
    pub fn brute_force_guess(
        &self,
        n_top_picks: usize,
        budget: SearchBudget,
    ) -> Result<Word, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::SessionFinished);
        }

        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(SolverError::NoCandidatesRemaining);
        }
        if candidates.len() == 1 {
            return Ok(candidates[0].clone());
        }

        if self.config.hard_mode {
            let pool = self.hard_mode_pool();
            brute_force_optimal_guess(&pool, &candidates, &self.prior, n_top_picks, budget)
                .map(Clone::clone)
        } else {
            brute_force_optimal_guess(&self.allowed, &candidates, &self.prior, n_top_picks, budget)
                .map(Clone::clone)
        }
    }

    /// Ask an external provider for the next guess, validated
    ///
    /// A suggestion is accepted only when it parses as a word and sits in the
    /// current candidate set; anything else, including a provider failure,
    /// falls back to the optimizer.
    ///
    /// # Errors
    /// Same conditions as [`GameSession::next_guess`].
    pub fn guess_with_provider(
        &self,
        provider: &dyn SuggestionProvider,
        config: &OptimizerConfig,
    ) -> Result<ProposedGuess, SolverError> {
        if self.status != GameStatus::InProgress {
            return Err(SolverError::SessionFinished);
        }

        let candidates = self.candidates();
        if candidates.is_empty() {
            return Err(SolverError::NoCandidatesRemaining);
        }

        if let Ok(suggestion) =
            provider.suggest(&candidates, &self.history, WORD_LEN, &self.config.language)
        {
            if let Ok(word) = Word::new(suggestion.word.as_str()) {
                if candidates.iter().any(|c| c.text() == word.text()) {
                    return Ok(ProposedGuess {
                        word,
                        rationale: Some(suggestion.rationale),
                        from_provider: true,
                    });
                }
            }
        }

        let word = self.next_guess(config)?;
        Ok(ProposedGuess {
            word,
            rationale: None,
            from_provider: false,
        })
    }

    /// Start over: clear history, constraints, and status
    pub fn reset(&mut self) {
        self.history.clear();
        self.store = ConstraintStore::new();
        self.status = GameStatus::InProgress;
    }

    /// Drop the most recent guess and rebuild the constraints without it
    ///
    /// Used when externally supplied feedback turns out to have been entered
    /// wrong. Returns false when there is nothing to undo.
    pub fn undo_last(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }
        // The store only ever tightens, so it must be rebuilt from scratch
        let history = std::mem::take(&mut self.history);
        self.store = ConstraintStore::new();
        for (guess, feedback) in &history {
            self.store.apply(guess, feedback);
        }
        self.history = history;
        self.status = GameStatus::InProgress;
        true
    }

    fn hard_mode_pool(&self) -> Vec<Word> {
        self.allowed
            .iter()
            .filter(|w| self.store.is_valid(w))
            .cloned()
            .collect()
    }
}
