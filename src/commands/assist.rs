//! Interactive assistant mode
//!
//! Suggests guesses and reads real-game feedback from stdin, one turn at a
//! time, until the game is solved or abandoned.

use crate::core::{Feedback, Word};
use crate::output::formatters::feedback_to_emoji;
use crate::prior::Prior;
use crate::session::{GameSession, GameStatus, SessionConfig};
use crate::solver::{OptimizerConfig, calculate_metrics};
use std::io::{self, Write};

/// Run the interactive assistant loop
///
/// # Errors
/// Returns an error string on I/O failure or when the session cannot be
/// constructed.
pub fn run_assist(
    allowed: &[Word],
    answers: &[Word],
    prior: &Prior,
    optimizer: &OptimizerConfig,
    hard_mode: bool,
) -> Result<(), String> {
    println!("\nWordle assistant");
    println!("After each suggested guess, enter the feedback you observed:");
    println!("  g = green (correct position), y = yellow (wrong position), b = gray (absent)");
    println!("Commands: 'win' when solved, 'undo', 'new', 'quit'\n");

    let config = SessionConfig {
        hard_mode,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(
        allowed.to_vec(),
        answers.to_vec(),
        prior.clone(),
        config,
    )
    .map_err(|e| e.to_string())?;

    loop {
        let candidates = session.candidates();

        if candidates.is_empty() {
            println!("No candidates remain; some feedback must be wrong.");
            println!("Type 'undo' to revise the last entry or 'new' to start over.\n");
            match read_input("Command")?.as_str() {
                "undo" | "u" => {
                    if !session.undo_last() {
                        println!("Nothing to undo.\n");
                    }
                }
                "new" | "n" => session.reset(),
                "quit" | "q" | "exit" => return Ok(()),
                _ => {}
            }
            continue;
        }

        let guess = match session.next_guess(optimizer) {
            Ok(guess) => guess,
            Err(e) => return Err(e.to_string()),
        };

        let turn = session.history().len() + 1;
        println!("Turn {turn}: {} candidates remaining", candidates.len());

        let metrics = calculate_metrics(&guess, &candidates, prior);
        println!(
            "Suggested guess: {}  ({:.3} bits, worst case {} left)",
            guess.text().to_uppercase(),
            metrics.entropy,
            metrics.max_partition
        );

        if candidates.len() <= 10 {
            let listed: Vec<String> = candidates
                .iter()
                .map(|w| w.text().to_uppercase())
                .collect();
            println!("Candidates: {}", listed.join(", "));
        }

        loop {
            let input = read_input("Feedback (g/y/b)")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => return Ok(()),
                "new" | "n" => {
                    session.reset();
                    println!("\nNew game.\n");
                    break;
                }
                "undo" | "u" => {
                    if !session.undo_last() {
                        println!("Nothing to undo.\n");
                    }
                    break;
                }
                "win" | "solved" => {
                    let solved = Feedback::parse("ggggg").map_err(|e| e.to_string())?;
                    session
                        .accept_feedback(guess.clone(), solved)
                        .map_err(|e| e.to_string())?;
                    break;
                }
                _ => match Feedback::parse(&input) {
                    Ok(feedback) => {
                        session
                            .accept_feedback(guess.clone(), feedback)
                            .map_err(|e| e.to_string())?;
                        println!("  {}\n", feedback_to_emoji(feedback));
                        break;
                    }
                    Err(e) => println!("{e}"),
                },
            }
        }

        match session.status() {
            GameStatus::Solved => {
                println!(
                    "\nSolved in {} {}.\n",
                    session.history().len(),
                    if session.history().len() == 1 {
                        "guess"
                    } else {
                        "guesses"
                    }
                );
                if read_input("Play again? (yes/no)")?.to_lowercase().starts_with('y') {
                    session.reset();
                    println!();
                } else {
                    return Ok(());
                }
            }
            GameStatus::Exhausted => {
                println!("\nOut of attempts.\n");
                if read_input("Play again? (yes/no)")?.to_lowercase().starts_with('y') {
                    session.reset();
                    println!();
                } else {
                    return Ok(());
                }
            }
            GameStatus::InProgress => {}
        }
    }
}

/// Read one trimmed line from stdin
fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
