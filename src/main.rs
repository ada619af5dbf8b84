//! Wordle engine - CLI
//!
//! Solver front-end: interactive assistant, self-play, word analysis, and
//! benchmarking over the embedded word lists.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_engine::{
    commands::{SolveConfig, analyze_word, run_assist, run_benchmark, sample_targets, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    prior::{Prior, WordListMode},
    solver::OptimizerConfig,
    wordlists::{embedded_words, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle solver combining constraint propagation with entropy-based guess selection",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'all' (default), 'answers', or a path to a custom file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Frequency table file for a frequency-weighted prior (word count per line)
    #[arg(short = 'f', long, global = true)]
    frequencies: Option<PathBuf>,

    /// Hard mode: every guess must be consistent with all feedback so far
    #[arg(long, global = true)]
    hard: bool,

    /// Enable two-ply lookahead on the top single-ply candidates
    #[arg(long, global = true)]
    two_ahead: bool,

    /// Score purely by expected information, ignoring outright wins
    #[arg(long, global = true)]
    pure_info: bool,

    /// Score against a uniform distribution instead of the prior
    #[arg(long, global = true)]
    uniform: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default): suggests guesses, you enter feedback
    Assist,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve
        word: String,

        /// Show per-step entropy and candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Use the brute-force expected-turns search over the top N picks
        #[arg(short = 'b', long)]
        brute_force: Option<usize>,
    },

    /// Analyze the information metrics of a single word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance over random answer words
    Benchmark {
        /// Number of random target words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Resolve the guess pool and answer list from the -w flag
fn load_wordlists(wordlist_mode: &str) -> Result<(Vec<Word>, Vec<Word>)> {
    let answers = embedded_words(WordListMode::Answers);

    match WordListMode::from_name(wordlist_mode) {
        Ok(WordListMode::Allowed) => Ok((embedded_words(WordListMode::Allowed), answers)),
        Ok(WordListMode::Answers) => Ok((answers.clone(), answers)),
        // Not a named mode: treat it as a path to a custom word list
        Err(_) => {
            let custom = loader::load_from_file(wordlist_mode)?;
            Ok((custom, answers))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (allowed, answers) = load_wordlists(&cli.wordlist)?;

    let prior = match &cli.frequencies {
        Some(path) => {
            let table = loader::load_frequencies(path)?;
            // Concentrate mass on roughly the most common quarter of the list
            Prior::from_frequencies(&answers, &table, answers.len() / 4)
        }
        None => Prior::answer_list(&answers),
    };

    let optimizer = OptimizerConfig {
        look_two_ahead: cli.two_ahead,
        purely_maximize_information: cli.pure_info,
        optimize_for_uniform_distribution: cli.uniform,
        ..OptimizerConfig::default()
    };

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => {
            run_assist(&allowed, &answers, &prior, &optimizer, cli.hard)
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Solve {
            word,
            verbose,
            brute_force,
        } => {
            let config = SolveConfig {
                target: word,
                optimizer,
                brute_force_picks: brute_force,
                hard_mode: cli.hard,
            };
            let result =
                solve_word(&config, &allowed, &answers, &prior).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &answers, &prior).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count } => {
            let targets = sample_targets(&answers, count);
            println!("Running benchmark on {} random words...", targets.len());
            let result = run_benchmark(&allowed, &answers, &prior, &optimizer, &targets, true);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
