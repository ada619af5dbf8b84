//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterOutcome};
use colored::Colorize;

/// Render feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .outcomes()
        .iter()
        .map(|outcome| match outcome {
            LetterOutcome::Correct => '🟩',
            LetterOutcome::Present => '🟨',
            LetterOutcome::Absent => '⬜',
        })
        .collect()
}

/// Render a guess with each letter colored by its outcome
#[must_use]
pub fn colorize_guess(word: &str, feedback: Feedback) -> String {
    word.to_uppercase()
        .chars()
        .zip(feedback.outcomes())
        .map(|(ch, outcome)| {
            let s = ch.to_string();
            match outcome {
                LetterOutcome::Correct => s.bright_green().bold().to_string(),
                LetterOutcome::Present => s.bright_yellow().bold().to_string(),
                LetterOutcome::Absent => s.bright_black().to_string(),
            }
        })
        .collect()
}

/// Text progress bar scaled to `max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
