//! End-of-session results.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Color, Stylize};

use super::state::Tally;
use crate::models::ProblemSet;

const QUESTION_PREVIEW_LENGTH: usize = 55;

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every problem received an answer.
    Complete,
    /// The deadline expired first.
    TimedOut,
}

/// What happened to a single problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemOutcome {
    Correct,
    Incorrect { given: String },
    /// Input ended before this problem was answered.
    InputClosed,
    /// Never answered because time ran out.
    Unanswered,
}

impl ProblemOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub tally: Tally,
    pub elapsed: Duration,
    /// One entry per problem, in order.
    pub problems: Vec<ProblemOutcome>,
}

impl SessionReport {
    pub fn summary_line(&self) -> String {
        format!(
            "You scored {} out of {}.",
            self.tally.correct, self.tally.total
        )
    }

    pub fn percentage(&self) -> f64 {
        calculate_percentage(self.tally.correct, self.tally.total)
    }

    pub fn timed_out(&self) -> bool {
        self.outcome == SessionOutcome::TimedOut
    }

    /// Write a per-question breakdown followed by the percentage.
    pub fn write_review<W: Write>(
        &self,
        out: &mut W,
        problems: &ProblemSet,
        colored: bool,
    ) -> io::Result<()> {
        writeln!(out)?;
        for (index, (outcome, problem)) in self.problems.iter().zip(problems).enumerate() {
            let (symbol, color) = if outcome.is_correct() {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };

            let detail = match outcome {
                ProblemOutcome::Correct => String::new(),
                ProblemOutcome::Incorrect { given } => {
                    format!("  (you said {:?}, expected {:?})", given, problem.answer)
                }
                ProblemOutcome::InputClosed => {
                    format!("  (no input, expected {:?})", problem.answer)
                }
                ProblemOutcome::Unanswered => {
                    format!("  (out of time, expected {:?})", problem.answer)
                }
            };

            writeln!(
                out,
                " {} {:2}. {}{}",
                paint(symbol, color, colored),
                index + 1,
                truncate_question(&problem.question),
                detail
            )?;
        }

        let percentage = self.percentage();
        writeln!(out)?;
        writeln!(
            out,
            "{}",
            paint(
                &format!(
                    "{} / {}  ({:.0}%)",
                    self.tally.correct, self.tally.total, percentage
                ),
                grade_color(percentage),
                colored
            )
        )
    }
}

fn calculate_percentage(score: usize, total: usize) -> f64 {
    if total > 0 {
        (score as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

fn grade_color(percentage: f64) -> Color {
    match percentage as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn paint(text: &str, color: Color, colored: bool) -> String {
    if colored {
        text.with(color).to_string()
    } else {
        text.to_string()
    }
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}
