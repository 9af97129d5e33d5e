use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{execute_command, CommandResult};
use crate::console::Console;
use crate::store::QuizStore;

const PROMPT: &str = "quiz > ";

/// The quiz trainer: the store plus the random source used by `play`.
pub struct App {
    store: QuizStore,
    rng: StdRng,
}

impl App {
    /// Create an app whose play order is seeded from OS entropy.
    pub fn new(store: QuizStore) -> Self {
        Self {
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an app with a reproducible play order.
    pub fn with_seed(store: QuizStore, seed: u64) -> Self {
        Self {
            store,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn store(&self) -> &QuizStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut QuizStore {
        &mut self.store
    }

    pub(crate) fn store_and_rng(&mut self) -> (&QuizStore, &mut StdRng) {
        (&self.store, &mut self.rng)
    }

    /// Read and execute commands until `quit` or end of input.
    pub async fn run<C: Console>(&mut self, console: &mut C) -> io::Result<()> {
        log::info!("Session started with {} quizzes", self.store.len());

        loop {
            let Some(line) = console.prompt_for_text(PROMPT, None).await? else {
                break;
            };

            if execute_command(self, console, &line).await? == CommandResult::Quit {
                break;
            }
        }

        log::info!("Session ended");
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(QuizStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::models::Quiz;

    #[tokio::test]
    async fn test_run_until_quit() {
        let mut app = App::with_seed(QuizStore::with_quizzes(vec![Quiz::new("2+2?", "4")]), 1);
        let mut console = ScriptedConsole::new(["list", "show 0", "quit", "list"]);

        app.run(&mut console).await.unwrap();

        assert_eq!(console.lines(), vec!["[0]: 2+2?", "[0]: 2+2? => 4"]);
        assert_eq!(console.remaining_replies(), 1);
    }

    #[tokio::test]
    async fn test_run_until_end_of_input() {
        let mut app = App::default();
        let mut console = ScriptedConsole::new(["add", "2+2?", "4", "test 0", " 4 "]);

        app.run(&mut console).await.unwrap();

        assert_eq!(app.store().len(), 1);
        assert_eq!(console.banners(), vec!["Correct"]);
        assert_eq!(console.prompts().last(), Some(&PROMPT));
    }

    #[tokio::test]
    async fn test_errors_return_to_prompt() {
        let mut app = App::with_seed(
            QuizStore::with_quizzes(vec![
                Quiz::new("2+2?", "4"),
                Quiz::new("capital of France?", "Paris"),
            ]),
            3,
        );
        let mut console = ScriptedConsole::new(["show", "show 5", "delete 0", "show 0", "q"]);

        app.run(&mut console).await.unwrap();

        assert_eq!(console.errors().len(), 2);
        assert_eq!(
            console.lines(),
            vec!["Deleted [0]: 2+2? => 4", "[0]: capital of France? => Paris"]
        );
    }

    #[tokio::test]
    async fn test_full_play_session() {
        let mut app = App::with_seed(
            QuizStore::with_quizzes(vec![Quiz::new("a?", "x"), Quiz::new("b?", "x")]),
            99,
        );
        let mut console = ScriptedConsole::new(["play", "x", "X", "quit"]);

        app.run(&mut console).await.unwrap();

        assert_eq!(console.banners(), vec!["2"]);
        assert_eq!(console.remaining_replies(), 0);
    }
}
