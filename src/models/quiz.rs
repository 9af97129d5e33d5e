use std::fmt;

use serde::{Deserialize, Serialize};

/// A question/answer pair. The answer is stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub answer: String,
}

impl Quiz {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    /// Returns true if `reply` matches the stored answer, ignoring case and
    /// surrounding whitespace on both sides.
    pub fn is_correct(&self, reply: &str) -> bool {
        normalize_answer(reply) == normalize_answer(&self.answer)
    }
}

impl fmt::Display for Quiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.question, self.answer)
    }
}

/// Lowercase and trim an answer for comparison.
pub fn normalize_answer(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_correct_ignores_case_and_whitespace() {
        let quiz = Quiz::new("capital of France?", "Paris");
        assert!(quiz.is_correct("Paris"));
        assert!(quiz.is_correct("  paris \n"));
        assert!(quiz.is_correct("PARIS"));
    }

    #[test]
    fn test_is_correct_rejects_other_answers() {
        let quiz = Quiz::new("capital of France?", "Paris");
        assert!(!quiz.is_correct("Lyon"));
        assert!(!quiz.is_correct(""));
        assert!(!quiz.is_correct("Pa ris"));
    }

    #[test]
    fn test_stored_answer_is_normalized_too() {
        let quiz = Quiz::new("2+2?", "  4 ");
        assert!(quiz.is_correct("4"));
    }

    #[test]
    fn test_empty_answer_matches_empty_reply() {
        let quiz = Quiz::new("", "");
        assert!(quiz.is_correct("   "));
    }

    #[test]
    fn test_display() {
        let quiz = Quiz::new("2+2?", "4");
        assert_eq!(quiz.to_string(), "2+2? => 4");
    }
}
