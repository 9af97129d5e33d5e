use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Quiz;

/// Error returned when a quiz file can't be loaded.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// The file is not a JSON array of quizzes.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            LoadError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Read { source, .. } => Some(source),
            LoadError::Parse { source, .. } => Some(source),
        }
    }
}

/// Load quizzes from a JSON file containing an array of
/// `{"question": ..., "answer": ...}` objects. An empty array is allowed.
pub fn load_quizzes_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Quiz>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let quizzes: Vec<Quiz> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("Loaded {} quizzes from {}", quizzes.len(), path.display());
    Ok(quizzes)
}

/// Sample quizzes used when no file is given.
pub fn default_quizzes() -> Vec<Quiz> {
    vec![
        Quiz::new("Capital of Italy", "Rome"),
        Quiz::new("Capital of France", "Paris"),
        Quiz::new("Capital of Spain", "Madrid"),
        Quiz::new("Capital of Portugal", "Lisbon"),
    ]
}
