//! Wordle Brute - CLI
//!
//! Brute-force Wordle solver: interactive play, single-word solves, guess
//! analysis and whole-dictionary benchmarks.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_brute::{
    commands::{analyze_word, run_benchmark, run_play, sample_answers, solve_word},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{DEFAULT_NUM_CHARS, Solver, SolverConfig},
    wordlists::{DEFAULT_WORDLIST, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_brute",
    about = "Brute-force Wordle solver minimizing the expected number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line
    #[arg(short = 'w', long, global = true, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Fixed opening guess (default: best-scoring dictionary word)
    #[arg(short = 'f', long, global = true)]
    first_guess: Option<String>,

    /// Letters per word
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_NUM_CHARS)]
    num_chars: usize,

    /// Skip precomputing the candidate sets after the opening guess
    #[arg(long, global = true)]
    no_cache: bool,

    /// Log every turn
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: play the suggested guesses and enter the feedback (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,
    },

    /// Score a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve every dictionary word (or a random sample) and report statistics
    Benchmark {
        /// Number of random words to test (default: all)
        #[arg(short = 'c', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let solver = build_solver(&cli)?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&solver, io::stdin().lock(), io::stdout().lock())
            .context("interactive session failed"),
        Commands::Solve { word } => {
            let result =
                solve_word(&solver, &word).with_context(|| format!("could not solve {word}"))?;
            print_solve_result(&result, cli.verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &solver)
                .with_context(|| format!("could not analyze {word}"))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            let targets = sample_answers(solver.dictionary(), count, seed);
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&solver, &targets, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn build_solver(cli: &Cli) -> Result<Solver> {
    let dictionary = load_from_file(&cli.wordlist, cli.num_chars)
        .with_context(|| format!("failed to load word list {}", cli.wordlist))?;

    let mut config = SolverConfig::new(dictionary)
        .with_num_chars(cli.num_chars)
        .with_cache(!cli.no_cache)
        .with_verbose(cli.verbose);
    if let Some(guess) = &cli.first_guess {
        config = config.with_first_guess(guess.clone());
    }

    let solver = Solver::new(config).context("invalid solver configuration")?;
    log::info!(
        "loaded {} words of {} letters from {}",
        solver.dictionary().len(),
        solver.num_chars(),
        cli.wordlist
    );
    Ok(solver)
}
