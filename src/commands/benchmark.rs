//! Benchmark command
//!
//! Solves many answers and collects guess-count statistics. Sessions are
//! independent, so answers are spread across threads with rayon; they all
//! share the one solver and its cache.

use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    /// Answers with the most guesses, hardest first
    pub hardest: Vec<(String, usize)>,
    /// Answers the solver could not finish, with the error
    pub failures: Vec<(String, String)>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// How many of the hardest answers to keep
const HARDEST_KEPT: usize = 10;

/// Pick `count` answers at random, reproducibly for a given seed
///
/// Returns the whole dictionary, in order, when `count` is `None` or not
/// smaller than it.
#[must_use]
pub fn sample_answers(dictionary: &[Word], count: Option<usize>, seed: u64) -> Vec<&Word> {
    match count {
        Some(n) if n < dictionary.len() => {
            let mut rng = StdRng::seed_from_u64(seed);
            dictionary.choose_multiple(&mut rng, n).collect()
        }
        _ => dictionary.iter().collect(),
    }
}

/// Solve every target word and collect statistics
pub fn run_benchmark(solver: &Solver, targets: &[&Word], show_progress: bool) -> BenchmarkResult {
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(targets.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {eta}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(String, Result<usize, String>)> = targets
        .par_iter()
        .map(|target| {
            let result = solver
                .solve_answer(target.text())
                .map(|outcome| outcome.guesses)
                .map_err(|e| e.to_string());
            pb.inc(1);
            (target.text().to_string(), result)
        })
        .collect();

    pb.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved_counts: Vec<(String, usize)> = Vec::new();
    let mut failures = Vec::new();

    for (word, result) in results {
        match result {
            Ok(guesses) => {
                *distribution.entry(guesses).or_insert(0) += 1;
                solved_counts.push((word, guesses));
            }
            Err(e) => {
                log::warn!("failed to solve {word}: {e}");
                failures.push((word, e));
            }
        }
    }

    let duration = start.elapsed();
    let solved = solved_counts.len();
    let total_guesses: usize = solved_counts.iter().map(|(_, n)| n).sum();
    let min_guesses = solved_counts.iter().map(|(_, n)| *n).min().unwrap_or(0);
    let max_guesses = solved_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut hardest = solved_counts;
    hardest.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest.truncate(HARDEST_KEPT);

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses,
        max_guesses,
        distribution,
        hardest,
        failures,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
