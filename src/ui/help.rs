//! Help and credits text.

/// Lines printed by `help`.
pub const HELP: &[&str] = &[
    "Commands:",
    "  h|help      - Show this help",
    "  list        - List the existing quizzes",
    "  show <id>   - Show the question and answer of a quiz",
    "  add         - Add a new quiz interactively",
    "  delete <id> - Delete a quiz",
    "  edit <id>   - Edit a quiz (empty keeps a field, - clears it)",
    "  test <id>   - Answer a single quiz",
    "  p|play      - Answer every quiz in random order",
    "  credits     - Show the credits",
    "  q|quit      - Exit the program",
];

/// Lines printed by `credits`.
pub const CREDITS: &[&str] = &["Authors:", "  The quiz-trainer contributors"];
