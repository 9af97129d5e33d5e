use crate::console::Console;
use crate::store::QuizStore;
use crate::ui;
use crate::QuizError;

use super::Verdict;

/// Ask the quiz at `id` once and report whether the reply was right.
///
/// Returns `Ok(None)` if input closed before an answer was given.
pub async fn test_quiz<C: Console>(
    store: &QuizStore,
    id: &str,
    console: &mut C,
) -> Result<Option<Verdict>, QuizError> {
    let quiz = store.get_by_index(id)?;

    let Some(reply) = console
        .prompt_for_text(&ui::question_prompt(quiz), None)
        .await?
    else {
        return Ok(None);
    };

    let verdict = Verdict::from_match(quiz.is_correct(&reply));
    log::debug!("Test of quiz {}: {:?}", id, verdict);

    console.display_line("Your answer is:");
    console.display_banner(&verdict.to_string());

    Ok(Some(verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::models::Quiz;

    fn store() -> QuizStore {
        QuizStore::with_quizzes(vec![
            Quiz::new("2+2?", "4"),
            Quiz::new("capital of France?", "Paris"),
        ])
    }

    #[tokio::test]
    async fn test_correct_answer() {
        let mut console = ScriptedConsole::new(["  PARIS "]);
        let verdict = test_quiz(&store(), "1", &mut console).await.unwrap();

        assert_eq!(verdict, Some(Verdict::Correct));
        assert_eq!(console.prompts(), vec!["capital of France? "]);
        assert_eq!(console.lines(), vec!["Your answer is:"]);
        assert_eq!(console.banners(), vec!["Correct"]);
    }

    #[tokio::test]
    async fn test_incorrect_answer() {
        let mut console = ScriptedConsole::new(["5"]);
        let verdict = test_quiz(&store(), "0", &mut console).await.unwrap();

        assert_eq!(verdict, Some(Verdict::Incorrect));
        assert_eq!(console.banners(), vec!["Incorrect"]);
    }

    #[tokio::test]
    async fn test_empty_answer_is_incorrect() {
        let mut console = ScriptedConsole::new([""]);
        let verdict = test_quiz(&store(), "0", &mut console).await.unwrap();
        assert_eq!(verdict, Some(Verdict::Incorrect));
    }

    #[tokio::test]
    async fn test_invalid_id_asks_nothing() {
        let mut console = ScriptedConsole::new(["4"]);
        let err = test_quiz(&store(), "2", &mut console).await.unwrap_err();

        assert!(matches!(err, QuizError::InvalidIndex(ref id) if id == "2"));
        assert!(console.prompts().is_empty());
        assert_eq!(console.remaining_replies(), 1);
    }

    #[tokio::test]
    async fn test_input_closed() {
        let mut console = ScriptedConsole::default();
        let verdict = test_quiz(&store(), "0", &mut console).await.unwrap();
        assert_eq!(verdict, None);
        assert!(console.banners().is_empty());
    }
}
