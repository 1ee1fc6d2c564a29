//! Wordle Brute
//!
//! A brute-force Wordle solver. Every dictionary word is scored by how it
//! splits the remaining candidates (sum of squared feedback-group sizes) and
//! the lowest-scoring word is guessed until the answer is found.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_brute::core::{Pattern, Word};
//! use wordle_brute::solver::{Solver, SolverConfig};
//!
//! // Feedback for a single guess
//! let guess = Word::new("raise").unwrap();
//! let answer = Word::new("crate").unwrap();
//! assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "yy__g");
//!
//! // A whole game
//! let dictionary = ["raise", "trace", "crate", "slate"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//! let solver = Solver::new(SolverConfig::new(dictionary).with_first_guess("raise")).unwrap();
//! assert_eq!(solver.solve_answer("crate").unwrap().guesses, 3);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolverError};
