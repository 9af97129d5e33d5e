//! Quiz storage.
//!
//! Quizzes are identified by their position. Deleting a quiz shifts every
//! later quiz down by one, so an id is only meaningful until the next delete.

use crate::models::Quiz;
use crate::QuizError;

/// Ordered in-memory collection of quizzes.
#[derive(Debug, Clone, Default)]
pub struct QuizStore {
    quizzes: Vec<Quiz>,
}

impl QuizStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given quizzes, in order.
    pub fn with_quizzes(quizzes: Vec<Quiz>) -> Self {
        Self { quizzes }
    }

    /// Number of stored quizzes.
    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }

    /// Iterate over `(id, quiz)` pairs in storage order.
    ///
    /// The iterator is `Clone`, so it can be restarted.
    pub fn get_all(&self) -> impl Iterator<Item = (usize, &Quiz)> + Clone {
        self.quizzes.iter().enumerate()
    }

    /// Get the quiz at position `id`.
    pub fn get_by_index(&self, id: &str) -> Result<&Quiz, QuizError> {
        let index = self.validate_index(id)?;
        Ok(&self.quizzes[index])
    }

    /// Append a quiz. Its id is the previous length of the store.
    pub fn add(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        let quiz = Quiz::new(question, answer);
        log::debug!("Adding quiz {}: {}", self.quizzes.len(), quiz);
        self.quizzes.push(quiz);
    }

    /// Replace the question and answer of the quiz at `id` in place.
    pub fn update(
        &mut self,
        id: &str,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<(), QuizError> {
        let index = self.validate_index(id)?;
        let quiz = Quiz::new(question, answer);
        log::debug!("Updating quiz {}: {}", index, quiz);
        self.quizzes[index] = quiz;
        Ok(())
    }

    /// Remove the quiz at `id` and return it. Later quizzes move down by one.
    pub fn delete_by_index(&mut self, id: &str) -> Result<Quiz, QuizError> {
        let index = self.validate_index(id)?;
        let quiz = self.quizzes.remove(index);
        log::debug!("Deleted quiz {}: {}", index, quiz);
        Ok(quiz)
    }

    /// Parse `id` as a base-10 position inside the store.
    ///
    /// Only plain digits are accepted: no sign and no leading zeros, so the
    /// id echoed back by `show` is always the canonical one. Non-numeric,
    /// negative and out-of-range ids are all rejected with the raw id echoed
    /// back in the error.
    fn validate_index(&self, id: &str) -> Result<usize, QuizError> {
        let canonical = !id.is_empty()
            && id.bytes().all(|b| b.is_ascii_digit())
            && (id == "0" || !id.starts_with('0'));

        match id.parse::<usize>() {
            Ok(index) if canonical && index < self.quizzes.len() => Ok(index),
            _ => Err(QuizError::InvalidIndex(id.to_string())),
        }
    }
}
