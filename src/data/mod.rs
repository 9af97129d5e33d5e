mod loader;

pub use loader::{default_quizzes, load_quizzes_from_json, LoadError};
