//! # quiz-trainer
//!
//! An interactive command-line quiz trainer: keep a list of question/answer
//! pairs, edit them, and test yourself on one quiz or on all of them in
//! random order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_trainer::{default_quizzes, App, QuizError, QuizStore, TerminalConsole};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), QuizError> {
//!     let mut app = App::new(QuizStore::with_quizzes(default_quizzes()));
//!     let mut console = TerminalConsole::new(true);
//!
//!     app.run(&mut console).await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod commands;
pub mod console;
mod data;
mod models;
pub mod session;
mod store;
pub mod terminal;
mod ui;

use std::io;

pub use app::App;
pub use commands::{execute_command, CommandResult};
pub use console::{Console, ScriptedConsole};
pub use data::{default_quizzes, load_quizzes_from_json, LoadError};
pub use models::{normalize_answer, Quiz};
pub use store::QuizStore;
pub use terminal::TerminalConsole;

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// A command that needs an argument was given none.
    MissingArgument(&'static str),
    /// An id that is not a number, is negative, or is past the end.
    InvalidIndex(String),
    /// Error loading quizzes from file.
    Load(LoadError),
    /// IO error while talking to the terminal.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::MissingArgument(name) => write!(f, "Missing parameter {}.", name),
            QuizError::InvalidIndex(id) => {
                write!(f, "Invalid value for parameter id: \"{}\".", id)
            }
            QuizError::Load(e) => write!(f, "Failed to load quizzes: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
            QuizError::MissingArgument(_) | QuizError::InvalidIndex(_) => None,
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            QuizError::MissingArgument("id").to_string(),
            "Missing parameter id."
        );
        assert_eq!(
            QuizError::InvalidIndex("abc".to_string()).to_string(),
            "Invalid value for parameter id: \"abc\"."
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: QuizError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, QuizError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
