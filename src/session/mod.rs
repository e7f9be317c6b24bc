//! A single timed quiz session.
//!
//! [`QuizRunner`] presents each problem, then races an [`AnswerCollector`]
//! against the session [`Deadline`]. Whichever resolves first decides the
//! question; an expired deadline ends the session on the spot.

mod collector;
mod deadline;
mod report;
mod runner;
mod state;

pub use collector::{Answer, AnswerCollector, PendingAnswer};
pub use deadline::Deadline;
pub use report::{ProblemOutcome, SessionOutcome, SessionReport};
pub use runner::{DeadlinePolicy, QuizRunner};
pub use state::{SessionState, Tally};
