//! Interactive CLI mode
//!
//! The solver proposes guesses; a human plays them in a real game and types
//! back the feedback.

use crate::core::{Pattern, Word};
use crate::error::{Result, SolverError};
use crate::output::formatters::colorize_guess;
use crate::solver::{FeedbackProvider, SolveOutcome, Solver};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Reason string used when the player asks to stop
const QUIT: &str = "player quit";

/// Feedback typed by a person, one line per guess
///
/// Malformed lines are reported and asked for again. `win` is accepted as
/// all-Hit feedback and `quit` ends the session.
pub struct PromptFeedback<R, W> {
    input: R,
    output: W,
    num_chars: usize,
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub const fn new(input: R, output: W, num_chars: usize) -> Self {
        Self {
            input,
            output,
            num_chars,
        }
    }

    /// Where prompts are written
    pub const fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prompt and read one trimmed line, `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> FeedbackProvider for PromptFeedback<R, W> {
    fn feedback(&mut self, guess: &Word) -> Result<Pattern> {
        writeln!(self.output, "\n📊 Suggested guess: {}", colorize_guess(guess, None))?;

        loop {
            let Some(input) = self.ask("What was the result of the guess?")? else {
                return Err(SolverError::FeedbackUnavailable("input closed".to_string()));
            };

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    return Err(SolverError::FeedbackUnavailable(QUIT.to_string()));
                }
                "win" | "correct" | "solved" => return Ok(Pattern::solved(self.num_chars)),
                text => match Pattern::parse(text) {
                    Ok(pattern) if pattern.len() == self.num_chars => return Ok(pattern),
                    Ok(pattern) => writeln!(
                        self.output,
                        "❌ Expected {} marks, got {}\n",
                        self.num_chars,
                        pattern.len()
                    )?,
                    Err(e) => writeln!(self.output, "❌ {e}\n")?,
                },
            }
        }
    }
}

/// Run the interactive mode until the player stops
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails or the
/// dictionary is empty. Inconsistent feedback ends the current game only.
pub fn run_play<R: BufRead, W: Write>(solver: &Solver, input: R, output: W) -> Result<()> {
    let mut prompt = PromptFeedback::new(input, output, solver.num_chars());
    print_intro(prompt.output(), solver)?;

    loop {
        match solver.solve(&mut prompt) {
            Ok(outcome) => print_win(prompt.output(), &outcome)?,
            Err(SolverError::FeedbackUnavailable(_)) => break,
            Err(err @ SolverError::InconsistentFeedback { .. }) => {
                writeln!(prompt.output(), "\n❌ {err}")?;
                writeln!(prompt.output(), "No candidates remain! Your feedback may be incorrect.\n")?;
            }
            Err(err) => return Err(err),
        }

        match prompt.ask("Play again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(prompt.output(), "\n🔄 New game started!")?;
            }
            _ => break,
        }
    }

    writeln!(prompt.output(), "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn print_intro<W: Write>(out: &mut W, solver: &Solver) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Wordle Solver - Interactive Mode                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    writeln!(
        out,
        "Searching {} words of {} letters for the guess that leaves the fewest candidates.",
        solver.dictionary().len(),
        solver.num_chars()
    )?;
    writeln!(out, "After each guess, enter the feedback pattern:\n")?;
    writeln!(out, "  - Use g for a letter in the correct position")?;
    writeln!(out, "  - Use y for a letter in the wrong position")?;
    writeln!(out, "  - Use _ for a letter not in the word")?;
    writeln!(out, "  - Or type 'win' if you got it right, 'quit' to exit\n")?;
    Ok(())
}

fn print_win<W: Write>(out: &mut W, outcome: &SolveOutcome) -> Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "  🎉 Solved in {} {}",
        outcome.guesses.to_string().bright_cyan().bold(),
        if outcome.guesses == 1 { "guess" } else { "guesses" }
    )?;

    for (i, turn) in outcome.turns.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colorize_guess(&turn.guess, Some(&turn.pattern)),
            turn.pattern.to_emoji()
        )?;
    }

    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    Ok(())
}
