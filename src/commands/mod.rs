//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark, sample_answers};
pub use play::{PromptFeedback, run_play};
pub use solve::{GuessStep, SolveResult, solve_word};
