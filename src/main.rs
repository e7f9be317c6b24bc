use std::path::PathBuf;

use clap::Parser;
use timed_quiz::{
    DEFAULT_PROBLEMS_PATH, DEFAULT_TIME_LIMIT_SECS, Quiz, QuizConfig, TimeLimit,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File of 'question,answer' rows (or a JSON array of problems)
    #[arg(short, long, default_value = DEFAULT_PROBLEMS_PATH)]
    csv: PathBuf,

    /// Time limit for the quiz in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIME_LIMIT_SECS, conflicts_with = "untimed")]
    limit: u64,

    /// Wait for every answer with no time limit
    #[arg(long)]
    untimed: bool,

    /// Restart the full time limit after each correct answer
    #[arg(long)]
    reset_on_correct: bool,

    /// Show a per-question breakdown after the score
    #[arg(long)]
    review: bool,
}

impl Args {
    fn into_config(self) -> QuizConfig {
        let time_limit = if self.untimed {
            TimeLimit::Unbounded
        } else {
            TimeLimit::from_secs(self.limit)
        };

        QuizConfig {
            source_path: self.csv,
            time_limit,
            reset_timer_on_correct_answer: self.reset_on_correct,
            review: self.review,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let quiz = match Quiz::from_config(args.into_config()) {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result = runtime.block_on(quiz.run());
    // An abandoned stdin read may still be parked on a blocking thread.
    runtime.shutdown_background();

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
