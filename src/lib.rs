//! # timed-quiz
//!
//! A terminal quiz that asks a fixed list of questions against a clock.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timed_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load problems from the default problems.csv
//!     let quiz = Quiz::from_config(QuizConfig::default())?;
//!
//!     // Ask them on stdin/stdout
//!     let report = quiz.run().await?;
//!     println!("{:.0}%", report.percentage());
//!
//!     Ok(())
//! }
//! ```

mod config;
mod data;
mod models;
pub mod session;

use std::io::{self, IsTerminal, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, BufReader};

pub use config::{DEFAULT_TIME_LIMIT_SECS, QuizConfig, TimeLimit};
pub use data::{DEFAULT_PROBLEMS_PATH, LoadError, load_problems, parse_csv, parse_json};
pub use models::{Problem, ProblemSet};
pub use session::{DeadlinePolicy, QuizRunner, SessionOutcome, SessionReport};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Error loading problems from the source.
    #[error("Failed to load problems: {0}")]
    Load(#[from] LoadError),
    /// IO error while writing to the terminal.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded quiz, ready to be run.
pub struct Quiz {
    problems: ProblemSet,
    config: QuizConfig,
}

impl Quiz {
    /// Create a quiz from already parsed problems.
    pub fn new(problems: ProblemSet, config: QuizConfig) -> Self {
        Self { problems, config }
    }

    /// Load the problems named by `config.source_path`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use timed_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_config(QuizConfig::default()).expect("Failed to load quiz");
    /// ```
    pub fn from_config(config: QuizConfig) -> Result<Self, QuizError> {
        let problems = load_problems(&config.source_path)?;
        Ok(Self::new(problems, config))
    }

    pub fn problems(&self) -> &ProblemSet {
        &self.problems
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Run the quiz on stdin and stdout.
    ///
    /// Must be called inside a tokio runtime. A read still blocked on stdin
    /// after a timeout lives on a blocking thread, so callers that own the
    /// runtime should shut it down with `shutdown_background`.
    pub async fn run(&self) -> Result<SessionReport, QuizError> {
        let colored = io::stdout().is_terminal();
        self.run_session(BufReader::new(tokio::io::stdin()), io::stdout(), colored)
            .await
    }

    /// Run the quiz against arbitrary input and output streams.
    pub async fn run_with<R, W>(&self, input: R, output: W) -> Result<SessionReport, QuizError>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: Write,
    {
        self.run_session(input, output, false).await
    }

    async fn run_session<R, W>(
        &self,
        input: R,
        mut output: W,
        colored: bool,
    ) -> Result<SessionReport, QuizError>
    where
        R: AsyncBufRead + Unpin + Send + 'static,
        W: Write,
    {
        let policy = DeadlinePolicy::from_config(&self.config);
        let report = QuizRunner::new(&self.problems, policy, input, &mut output)
            .run()
            .await?;

        if self.config.review {
            report.write_review(&mut output, &self.problems, colored)?;
            output.flush()?;
        }

        Ok(report)
    }
}
