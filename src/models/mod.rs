mod quiz;

pub use quiz::{normalize_answer, Quiz};
