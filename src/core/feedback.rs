//! Feedback scoring and pattern encoding
//!
//! A [`Feedback`] is the ordered per-position outcome of a guess against a
//! secret. A [`Pattern`] is its base-3 integer encoding (digit i = outcome at
//! position i, absent=0, present=1, correct=2), stored in a single u8 in the
//! range 0-242. The two forms are bijective for the fixed word length.

use super::{SolverError, WORD_LEN, Word};
use std::fmt;

/// Outcome for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LetterOutcome {
    /// The letter does not occur in the secret (beyond already-matched copies)
    Absent = 0,
    /// The letter occurs in the secret but not at this position
    Present = 1,
    /// The letter sits exactly here
    Correct = 2,
}

impl LetterOutcome {
    /// Base-3 digit for this outcome
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            1 => Self::Present,
            2 => Self::Correct,
            _ => Self::Absent,
        }
    }
}

/// Per-position feedback for one guess
///
/// Immutable once produced. Exactly one canonical Feedback exists for any
/// (guess, secret) pair, computed by the two-pass rule in [`Feedback::score`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterOutcome; WORD_LEN]);

impl Feedback {
    /// Build a Feedback directly from per-position outcomes
    #[must_use]
    pub const fn from_outcomes(outcomes: [LetterOutcome; WORD_LEN]) -> Self {
        Self(outcomes)
    }

    /// Score `guess` against `secret` under official Wordle rules
    ///
    /// Two passes over the positions, sharing a per-letter pool initialized
    /// from the secret's letter multiset:
    ///
    /// 1. Exact matches are marked correct and consume from the pool.
    /// 2. Remaining positions are marked present only while the pool still
    ///    holds that letter, otherwise absent.
    ///
    /// Scoring position-by-position without the shared pool mishandles
    /// repeated letters: against "roost", "robot" gets exactly one misplaced
    /// o, not two.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Feedback, LetterOutcome, Word};
    ///
    /// let guess = Word::new("robot").unwrap();
    /// let secret = Word::new("roost").unwrap();
    /// let fb = Feedback::score(&guess, &secret);
    ///
    /// use LetterOutcome::{Absent, Correct, Present};
    /// assert_eq!(
    ///     fb.outcomes(),
    ///     &[Correct, Correct, Absent, Present, Correct]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        let mut outcomes = [LetterOutcome::Absent; WORD_LEN];
        let mut pool = secret.letter_counts();

        // First pass: exact matches consume from the pool
        for i in 0..WORD_LEN {
            if guess.char_at(i) == secret.char_at(i) {
                outcomes[i] = LetterOutcome::Correct;
                pool[(guess.char_at(i) - b'a') as usize] -= 1;
            }
        }

        // Second pass: misplaced letters, limited by what the pool still holds
        for i in 0..WORD_LEN {
            if outcomes[i] == LetterOutcome::Correct {
                continue;
            }
            let idx = (guess.char_at(i) - b'a') as usize;
            if pool[idx] > 0 {
                outcomes[i] = LetterOutcome::Present;
                pool[idx] -= 1;
            }
        }

        Self(outcomes)
    }

    /// The per-position outcomes
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LEN] {
        &self.0
    }

    /// Outcome at a single position
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> LetterOutcome {
        self.0[position]
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&o| o == LetterOutcome::Correct)
    }

    /// Parse a feedback string
    ///
    /// Accepts one symbol per position:
    /// - `g`/`G`/🟩 for correct
    /// - `y`/`Y`/🟨 for present
    /// - `b`/`B`/`-`/`_`/⬜ for absent
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidFeedbackFormat`] on a length mismatch or
    /// an unrecognized symbol, without partial results.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::Feedback;
    ///
    /// let fb = Feedback::parse("bygyg").unwrap();
    /// assert_eq!(fb, Feedback::parse("-YGYG").unwrap());
    /// assert!(Feedback::parse("byg").is_err());
    /// assert!(Feedback::parse("bygxz").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolverError> {
        let symbols: Vec<char> = s.chars().collect();

        if symbols.len() != WORD_LEN {
            return Err(SolverError::InvalidFeedbackFormat(s.to_string()));
        }

        let mut outcomes = [LetterOutcome::Absent; WORD_LEN];
        for (i, ch) in symbols.into_iter().enumerate() {
            outcomes[i] = match ch {
                'g' | 'G' | '🟩' => LetterOutcome::Correct,
                'y' | 'Y' | '🟨' => LetterOutcome::Present,
                'b' | 'B' | '-' | '_' | '⬜' => LetterOutcome::Absent,
                _ => return Err(SolverError::InvalidFeedbackFormat(s.to_string())),
            };
        }

        Ok(Self(outcomes))
    }
}

/// Renders as the compact `b`/`y`/`g` form, e.g. `"bygyg"`
impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &outcome in &self.0 {
            f.write_str(match outcome {
                LetterOutcome::Absent => "b",
                LetterOutcome::Present => "y",
                LetterOutcome::Correct => "g",
            })?;
        }
        Ok(())
    }
}

/// Base-3 integer encoding of a [`Feedback`]
///
/// Value range: 0-242 (3^5 - 1 = 242). Used as the key when grouping words
/// by the outcome a guess would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(u8);

impl Pattern {
    /// All correct (perfect match): 2 + 2×3 + 2×9 + 2×27 + 2×81
    pub const PERFECT: Self = Self(242);

    /// Number of distinct patterns for the fixed word length
    pub const COUNT: usize = 243;

    /// Create a pattern from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern value must be < 243");
        Self(value)
    }

    /// The raw pattern value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check for a perfect match (all correct)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Encode a Feedback as base-3 positional digits
    #[must_use]
    pub fn encode(feedback: Feedback) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for &outcome in feedback.outcomes() {
            value += outcome.digit() * multiplier;
            multiplier *= 3;
        }
        Self(value)
    }

    /// Decode back to per-position outcomes
    ///
    /// Inverse of [`Pattern::encode`]: `decode(encode(fb)) == fb` for every
    /// Feedback.
    #[must_use]
    pub fn decode(self) -> Feedback {
        let mut outcomes = [LetterOutcome::Absent; WORD_LEN];
        let mut value = self.0;
        for outcome in &mut outcomes {
            *outcome = LetterOutcome::from_digit(value % 3);
            value /= 3;
        }
        Feedback::from_outcomes(outcomes)
    }

    /// Score and encode in one step
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> Self {
        Self::encode(Feedback::score(guess, secret))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.decode())
    }
}
