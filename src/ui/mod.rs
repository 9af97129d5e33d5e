//! Text shown by the command loop.

mod help;

pub use help::{CREDITS, HELP};

use crate::models::Quiz;

/// Prompt label used when asking a quiz.
pub fn question_prompt(quiz: &Quiz) -> String {
    if quiz.question.trim_end().ends_with('?') {
        format!("{} ", quiz.question.trim_end())
    } else {
        format!("{}? ", quiz.question)
    }
}

/// `[id]: question`, as shown by `list`.
pub fn list_entry(id: usize, quiz: &Quiz) -> String {
    format!("[{}]: {}", id, quiz.question)
}

/// `[id]: question => answer`, as shown by `show`.
pub fn show_entry(id: impl std::fmt::Display, quiz: &Quiz) -> String {
    format!("[{}]: {}", id, quiz)
}
