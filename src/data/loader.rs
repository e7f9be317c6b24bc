use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Problem, ProblemSet};

pub const DEFAULT_PROBLEMS_PATH: &str = "problems.csv";

/// Reasons a problem source can't become a session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    #[error("{} must contain at least one problem", path.display())]
    Empty { path: PathBuf },
}

/// Load problems from `path`, picking the format from its extension.
///
/// `.json` files hold an array of `{"question", "answer"}` objects; anything
/// else is read as headerless `question,answer` CSV rows.
pub fn load_problems<P: AsRef<Path>>(path: P) -> Result<ProblemSet, LoadError> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(reader, path)
    } else {
        parse_csv(reader, path)
    }
}

/// Parse headerless two-field CSV rows.
pub fn parse_csv<R: Read>(reader: R, path: &Path) -> Result<ProblemSet, LoadError> {
    let malformed = |reason: String| LoadError::MalformedInput {
        path: path.to_path_buf(),
        reason,
    };

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut problems = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let row = row + 1;
        let record = record.map_err(|err| malformed(format!("row {}: {}", row, err)))?;

        if record.len() != 2 {
            return Err(malformed(format!(
                "row {}: expected 2 fields (question,answer), found {}",
                row,
                record.len()
            )));
        }

        problems.push(validated(row, &record[0], &record[1]).map_err(malformed)?);
    }

    finish(problems, path)
}

/// Parse a JSON array of problems.
pub fn parse_json<R: Read>(reader: R, path: &Path) -> Result<ProblemSet, LoadError> {
    let raw: Vec<Problem> =
        serde_json::from_reader(reader).map_err(|err| LoadError::MalformedInput {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;

    let problems = raw
        .iter()
        .enumerate()
        .map(|(i, p)| validated(i + 1, &p.question, &p.answer))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| LoadError::MalformedInput {
            path: path.to_path_buf(),
            reason,
        })?;

    finish(problems, path)
}

fn validated(row: usize, question: &str, answer: &str) -> Result<Problem, String> {
    if question.trim().is_empty() {
        return Err(format!("row {}: question is empty", row));
    }
    Ok(Problem::new(question, answer))
}

fn finish(problems: Vec<Problem>, path: &Path) -> Result<ProblemSet, LoadError> {
    if problems.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    log::info!("loaded {} problems from {}", problems.len(), path.display());
    Ok(ProblemSet::new(problems))
}
