mod loader;

pub use loader::{DEFAULT_PROBLEMS_PATH, LoadError, load_problems, parse_csv, parse_json};
