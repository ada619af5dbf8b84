//! Constraint accumulation and the validity predicate

use crate::core::{Feedback, LetterOutcome, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Occurrence bounds for one letter of the secret
///
/// `max` is unbounded when `None`. A letter with `max == Some(0)` is fully
/// excluded from the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBounds {
    /// The letter occurs at least this many times
    pub min: u8,
    /// The letter occurs at most this many times, if known
    pub max: Option<u8>,
}

impl LetterBounds {
    const UNKNOWN: Self = Self { min: 0, max: None };

    /// Merge in new bounds, keeping the tighter side of each
    fn tighten(&mut self, min: u8, max: Option<u8>) {
        self.min = self.min.max(min);
        self.max = match (self.max, max) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
    }

    fn contradicts(self) -> bool {
        self.max.is_some_and(|max| max < self.min)
    }
}

/// Facts a candidate secret must satisfy, accumulated across guesses
///
/// Created empty at the start of a session, mutated once per accepted
/// feedback, discarded on reset. Merging always keeps the tightest bound seen
/// for each letter and position; contradictory pins mark the whole store
/// unsatisfiable rather than widening anything.
#[derive(Debug, Clone, Default)]
pub struct ConstraintStore {
    /// Positions pinned to an exact letter
    correct: [Option<u8>; WORD_LEN],
    /// Per letter, positions where the letter is known NOT to sit
    forbidden: FxHashMap<u8, [bool; WORD_LEN]>,
    /// Per-letter occurrence bounds
    bounds: FxHashMap<u8, LetterBounds>,
    /// Set when two feedbacks pin the same position to different letters
    unsatisfiable: bool,
}

impl ConstraintStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one guess and its feedback into the accumulated facts
    ///
    /// Rules per position:
    /// - correct pins the position and lifts any earlier not-here ban for
    ///   that letter at that position
    /// - present bans the letter from that position
    ///
    /// Rules per letter of the guess:
    /// - the minimum occurrence count rises to the number of correct+present
    ///   marks the letter received in this guess
    /// - an absent mark caps the maximum at that same number, which excludes
    ///   the letter entirely when it matched nowhere in the guess
    ///
    /// Bounds only ever tighten; a direct contradiction (two different pins
    /// on one position, or crossed bounds) flips the store to unsatisfiable,
    /// making every word invalid. That state surfaces to callers as
    /// [`crate::core::SolverError::NoCandidatesRemaining`] once filtering
    /// comes up empty.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        // Per-letter tallies for this guess: matched = correct + present
        let mut matched = [0u8; 26];
        let mut saw_absent = [false; 26];
        for i in 0..WORD_LEN {
            let idx = (guess.char_at(i) - b'a') as usize;
            match feedback.outcome_at(i) {
                LetterOutcome::Absent => saw_absent[idx] = true,
                LetterOutcome::Present | LetterOutcome::Correct => matched[idx] += 1,
            }
        }

        // Positional facts
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            match feedback.outcome_at(i) {
                LetterOutcome::Correct => {
                    match self.correct[i] {
                        Some(existing) if existing != letter => self.unsatisfiable = true,
                        _ => self.correct[i] = Some(letter),
                    }
                    if let Some(mask) = self.forbidden.get_mut(&letter) {
                        mask[i] = false;
                    }
                }
                LetterOutcome::Present => {
                    // A pin on this exact spot wins over a stale not-here ban,
                    // keeping accumulation order-independent
                    if self.correct[i] != Some(letter) {
                        self.forbidden.entry(letter).or_insert([false; WORD_LEN])[i] = true;
                    }
                }
                LetterOutcome::Absent => {}
            }
        }

        // Count bounds
        for idx in 0..26u8 {
            let n = matched[idx as usize];
            if n == 0 && !saw_absent[idx as usize] {
                continue;
            }
            let max = saw_absent[idx as usize].then_some(n);
            let entry = self
                .bounds
                .entry(idx + b'a')
                .or_insert(LetterBounds::UNKNOWN);
            entry.tighten(n, max);
            if entry.contradicts() {
                self.unsatisfiable = true;
            }
        }
    }

    /// Check a word against every accumulated fact
    ///
    /// Checks, in order: pinned positions, occurrence bounds (which subsume
    /// full exclusion as `max == 0`), then not-here bans.
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        if self.unsatisfiable {
            return false;
        }

        for i in 0..WORD_LEN {
            if let Some(letter) = self.correct[i] {
                if word.char_at(i) != letter {
                    return false;
                }
            }
        }

        let counts = word.letter_counts();
        for (&letter, bounds) in &self.bounds {
            let count = counts[(letter - b'a') as usize];
            if count < bounds.min {
                return false;
            }
            if bounds.max.is_some_and(|max| count > max) {
                return false;
            }
        }

        for (&letter, mask) in &self.forbidden {
            for i in 0..WORD_LEN {
                if mask[i] && word.char_at(i) == letter {
                    return false;
                }
            }
        }

        true
    }

    /// Whether no direct contradiction has been recorded
    ///
    /// A satisfiable store can still admit zero dictionary words; emptiness
    /// is decided by filtering, not here.
    #[must_use]
    pub const fn is_satisfiable(&self) -> bool {
        !self.unsatisfiable
    }

    /// Structured view of the accumulated facts, for inspection and tests
    ///
    /// All lists are sorted so the view is deterministic.
    #[must_use]
    pub fn summary(&self) -> ConstraintSummary {
        let correct_positions = self
            .correct
            .iter()
            .enumerate()
            .filter_map(|(i, &letter)| letter.map(|l| (i, l as char)))
            .collect();

        let mut present_letters: Vec<(char, Vec<usize>)> = self
            .forbidden
            .iter()
            .filter_map(|(&letter, mask)| {
                let positions: Vec<usize> = (0..WORD_LEN).filter(|&i| mask[i]).collect();
                if positions.is_empty() {
                    None
                } else {
                    Some((letter as char, positions))
                }
            })
            .collect();
        present_letters.sort_unstable();

        let mut absent_letters: Vec<char> = self
            .bounds
            .iter()
            .filter(|(_, b)| b.max == Some(0))
            .map(|(&letter, _)| letter as char)
            .collect();
        absent_letters.sort_unstable();

        let mut letter_counts: Vec<(char, LetterBounds)> = self
            .bounds
            .iter()
            .map(|(&letter, &bounds)| (letter as char, bounds))
            .collect();
        letter_counts.sort_unstable_by_key(|&(letter, _)| letter);

        ConstraintSummary {
            correct_positions,
            present_letters,
            absent_letters,
            letter_counts,
            satisfiable: !self.unsatisfiable,
        }
    }
}

/// Read-only snapshot of a [`ConstraintStore`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintSummary {
    /// Pinned (position, letter) pairs
    pub correct_positions: Vec<(usize, char)>,
    /// Letters known in the word, with the positions they cannot occupy
    pub present_letters: Vec<(char, Vec<usize>)>,
    /// Letters fully excluded from the word
    pub absent_letters: Vec<char>,
    /// Per-letter occurrence bounds
    pub letter_counts: Vec<(char, LetterBounds)>,
    /// False once a direct contradiction was recorded
    pub satisfiable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn apply_scored(store: &mut ConstraintStore, guess: &str, secret: &str) {
        let guess = word(guess);
        let feedback = Feedback::score(&guess, &word(secret));
        store.apply(&guess, &feedback);
    }

    #[test]
    fn empty_store_accepts_everything() {
        let store = ConstraintStore::new();
        assert!(store.is_valid(&word("crane")));
        assert!(store.is_valid(&word("fluff")));
    }

    #[test]
    fn arose_feedback_narrows_toward_robot() {
        let mut store = ConstraintStore::new();
        apply_scored(&mut store, "arose", "robot");

        // r and o are in the word but not where arose put them; a, s, e are out
        assert!(store.is_valid(&word("robot")));
        assert!(!store.is_valid(&word("arose"))); // a excluded
        assert!(!store.is_valid(&word("salad"))); // a excluded
        assert!(store.is_valid(&word("round"))); // r and o elsewhere, no excluded letters
    }

    #[test]
    fn present_letter_banned_from_its_position() {
        let mut store = ConstraintStore::new();
        apply_scored(&mut store, "arose", "robot");

        let summary = store.summary();
        // arose vs robot: r present at 1, o present at 2
        assert!(summary.present_letters.contains(&('r', vec![1])));
        assert!(summary.present_letters.contains(&('o', vec![2])));

        // torch has r at 2 and o at 1: allowed. "wrote" has r at 1: banned.
        assert!(!store.is_valid(&word("wrote")));
    }

    #[test]
    fn duplicate_letter_min_count_from_matches() {
        let mut store = ConstraintStore::new();
        // robot vs roost: o matched twice (correct at 1, present at 3)
        apply_scored(&mut store, "robot", "roost");

        let summary = store.summary();
        let o_bounds = summary
            .letter_counts
            .iter()
            .find(|(l, _)| *l == 'o')
            .map(|(_, b)| *b)
            .unwrap();
        assert_eq!(o_bounds.min, 2);

        assert!(store.is_valid(&word("roost")));
    }

    #[test]
    fn absent_on_repeated_letter_caps_max_count() {
        let mut store = ConstraintStore::new();
        // speed vs crane: first e present, second e absent -> exactly one e
        apply_scored(&mut store, "speed", "crane");

        let summary = store.summary();
        let e_bounds = summary
            .letter_counts
            .iter()
            .find(|(l, _)| *l == 'e')
            .map(|(_, b)| *b)
            .unwrap();
        assert_eq!(e_bounds, LetterBounds { min: 1, max: Some(1) });

        assert!(store.is_valid(&word("crane")));
        assert!(!store.is_valid(&word("erase"))); // two e's
    }

    #[test]
    fn unmatched_absent_letter_fully_excluded() {
        let mut store = ConstraintStore::new();
        apply_scored(&mut store, "arose", "robot");

        let summary = store.summary();
        assert_eq!(summary.absent_letters, vec!['a', 'e', 's']);
        assert!(!store.is_valid(&word("salad")));
        assert!(!store.is_valid(&word("route"))); // e excluded
    }

    #[test]
    fn bounds_only_tighten_across_guesses() {
        let mut store = ConstraintStore::new();
        // First guess caps e at one occurrence
        apply_scored(&mut store, "speed", "crane");
        // A later guess seeing a single present e must not widen the cap
        apply_scored(&mut store, "ledge", "crane");

        let summary = store.summary();
        let e_bounds = summary
            .letter_counts
            .iter()
            .find(|(l, _)| *l == 'e')
            .map(|(_, b)| *b)
            .unwrap();
        assert_eq!(e_bounds.max, Some(1));
        assert!(e_bounds.min >= 1);
    }

    #[test]
    fn correct_pin_lifts_not_here_ban() {
        use crate::core::LetterOutcome::{Absent, Correct, Present};

        let mut store = ConstraintStore::new();

        // Claim: o in the word, not at position 2
        store.apply(
            &word("among"),
            &Feedback::from_outcomes([Absent, Absent, Present, Absent, Absent]),
        );
        assert!(
            store
                .summary()
                .present_letters
                .iter()
                .any(|(l, pos)| *l == 'o' && pos.contains(&2))
        );
        assert!(!store.is_valid(&word("store")));

        // A later exact match on that spot pins it and lifts the ban
        store.apply(
            &word("floor"),
            &Feedback::from_outcomes([Absent, Absent, Correct, Absent, Absent]),
        );
        assert!(store.is_valid(&word("store")));
    }

    #[test]
    fn conflicting_pins_make_store_unsatisfiable() {
        use crate::core::LetterOutcome::{Absent, Correct};

        let mut store = ConstraintStore::new();
        let all_but_first = [Correct, Absent, Absent, Absent, Absent];

        store.apply(&word("angel"), &Feedback::from_outcomes(all_but_first));
        assert!(store.is_satisfiable());
        store.apply(&word("bench"), &Feedback::from_outcomes(all_but_first));

        assert!(!store.is_satisfiable());
        assert!(!store.is_valid(&word("angel")));
        assert!(!store.is_valid(&word("bench")));
        assert!(!store.summary().satisfiable);
    }

    #[test]
    fn crossed_count_bounds_make_store_unsatisfiable() {
        use crate::core::LetterOutcome::{Absent, Present};

        let mut store = ConstraintStore::new();
        // One feedback excludes s entirely
        store.apply(
            &word("sound"),
            &Feedback::from_outcomes([Absent; WORD_LEN]),
        );
        // Another claims s is in the word
        store.apply(
            &word("sight"),
            &Feedback::from_outcomes([Present, Absent, Absent, Absent, Absent]),
        );

        assert!(!store.is_satisfiable());
    }

    #[test]
    fn secret_always_valid_against_its_own_feedback() {
        let secret = "robot";
        let guesses = ["arose", "court", "crane", "blimp", "robin"];

        let mut store = ConstraintStore::new();
        for guess in guesses {
            apply_scored(&mut store, guess, secret);
            assert!(
                store.is_valid(&word(secret)),
                "secret must stay valid after {guess}"
            );
        }
    }

    #[test]
    fn application_order_does_not_matter() {
        let secret = "robot";
        let pairs = [("arose", secret), ("court", secret), ("speed", secret)];

        let mut forward = ConstraintStore::new();
        for (g, s) in pairs {
            apply_scored(&mut forward, g, s);
        }

        let mut backward = ConstraintStore::new();
        for (g, s) in pairs.iter().rev() {
            apply_scored(&mut backward, g, s);
        }

        let probes = ["robot", "roost", "rocky", "crane", "wrote", "motor"];
        for probe in probes {
            assert_eq!(
                forward.is_valid(&word(probe)),
                backward.is_valid(&word(probe)),
                "order must not affect validity of {probe}"
            );
        }
        assert_eq!(forward.summary(), backward.summary());
    }

    #[test]
    fn summary_of_empty_store() {
        let summary = ConstraintStore::new().summary();
        assert!(summary.correct_positions.is_empty());
        assert!(summary.present_letters.is_empty());
        assert!(summary.absent_letters.is_empty());
        assert!(summary.letter_counts.is_empty());
        assert!(summary.satisfiable);
    }
}
