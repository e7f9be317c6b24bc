//! The timed question loop.

use std::io::{self, Write};
use std::time::Duration;

use tokio::io::AsyncBufRead;
use tokio::time::Instant;

use super::collector::{Answer, AnswerCollector};
use super::deadline::Deadline;
use super::report::{ProblemOutcome, SessionOutcome, SessionReport};
use super::state::SessionState;
use crate::config::{QuizConfig, TimeLimit};
use crate::models::{Problem, ProblemSet};

/// When the deadline gets armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlinePolicy {
    /// One countdown for the whole session.
    SingleBudget(Duration),
    /// A fresh countdown after every correct answer; wrong answers don't
    /// buy time.
    ResetOnCorrect(Duration),
    /// No countdown.
    Unbounded,
}

impl DeadlinePolicy {
    pub fn new(time_limit: TimeLimit, reset_timer_on_correct_answer: bool) -> Self {
        match (time_limit, reset_timer_on_correct_answer) {
            (TimeLimit::Unbounded, _) => Self::Unbounded,
            (TimeLimit::Bounded(duration), false) => Self::SingleBudget(duration),
            (TimeLimit::Bounded(duration), true) => Self::ResetOnCorrect(duration),
        }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(config.time_limit, config.reset_timer_on_correct_answer)
    }

    fn initial(&self) -> Option<Duration> {
        match self {
            Self::SingleBudget(duration) | Self::ResetOnCorrect(duration) => Some(*duration),
            Self::Unbounded => None,
        }
    }

    fn after_correct(&self) -> Option<Duration> {
        match self {
            Self::ResetOnCorrect(duration) => Some(*duration),
            _ => None,
        }
    }
}

enum Race {
    Expired,
    Answered(Answer),
}

/// Asks each problem in turn, racing the reply against the deadline.
pub struct QuizRunner<'a, R, W> {
    problems: &'a ProblemSet,
    policy: DeadlinePolicy,
    collector: AnswerCollector<R>,
    output: W,
    deadline: Deadline,
    state: SessionState,
}

impl<'a, R, W> QuizRunner<'a, R, W>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write,
{
    pub fn new(problems: &'a ProblemSet, policy: DeadlinePolicy, input: R, output: W) -> Self {
        Self {
            problems,
            policy,
            collector: AnswerCollector::new(input),
            output,
            deadline: Deadline::unarmed(),
            state: SessionState::new(problems.len()),
        }
    }

    /// Run the session to completion or timeout and write the final score.
    ///
    /// Only output failures are errors; timeouts, wrong answers and closed
    /// input all end up in the report.
    pub async fn run(mut self) -> io::Result<SessionReport> {
        let problems = self.problems;
        let started = Instant::now();
        let mut outcomes = vec![ProblemOutcome::Unanswered; problems.len()];

        if let Some(duration) = self.policy.initial() {
            self.deadline.arm(duration);
        }
        log::info!(
            "session started: {} problems, {:?}",
            problems.len(),
            self.policy
        );

        let outcome = loop {
            if self.state.is_complete() {
                break SessionOutcome::Complete;
            }
            let index = self.state.index();
            let problem = &problems[index];

            write!(self.output, "Problem {}: {} = ", index + 1, problem.question)?;
            self.output.flush()?;

            let mut pending = self.collector.collect();
            let race = tokio::select! {
                biased;
                _ = self.deadline.fired() => Race::Expired,
                answer = self.collector.receive(&mut pending) => Race::Answered(answer),
            };

            match race {
                Race::Expired => {
                    pending.cancel();
                    log::debug!("deadline expired on problem {}", index + 1);
                    break SessionOutcome::TimedOut;
                }
                Race::Answered(answer) => {
                    let result = score(problem, answer);
                    let correct = result.is_correct();
                    log::debug!(
                        "problem {} answered ({:?}), {:?} left",
                        index + 1,
                        result,
                        self.deadline.remaining()
                    );
                    self.state.record(correct);
                    outcomes[index] = result;

                    if correct {
                        if let Some(duration) = self.policy.after_correct() {
                            self.deadline.arm(duration);
                        }
                    }
                }
            }
        };

        let report = SessionReport {
            outcome,
            tally: self.state.tally(),
            elapsed: started.elapsed(),
            problems: outcomes,
        };

        if report.timed_out() {
            writeln!(self.output)?;
        }
        writeln!(self.output, "{}", report.summary_line())?;
        self.output.flush()?;

        log::info!(
            "session ended {:?} after {:?}: {}/{}",
            report.outcome,
            report.elapsed,
            report.tally.correct,
            report.tally.total
        );
        Ok(report)
    }
}

fn score(problem: &Problem, answer: Answer) -> ProblemOutcome {
    match answer {
        Answer::Line(given) if problem.is_answered_by(&given) => ProblemOutcome::Correct,
        Answer::Line(given) => ProblemOutcome::Incorrect { given },
        Answer::Closed => ProblemOutcome::InputClosed,
    }
}
