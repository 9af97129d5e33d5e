//! Play mode: every quiz in random order until one is missed.

use std::io;

use rand::Rng;

use crate::console::Console;
use crate::models::Quiz;
use crate::store::QuizStore;
use crate::ui;

use super::Verdict;

/// Current phase of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// At least one quiz is still pending.
    Asking,
    /// Session over; no more questions will be asked.
    Finished(FinishReason),
}

/// Why a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /// Every quiz was answered correctly (or there were none).
    Exhausted,
    /// The last answer was wrong.
    WrongAnswer,
}

/// Final result of a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaySummary {
    pub score: usize,
    pub reason: FinishReason,
}

/// State of one play session.
///
/// The quizzes are copied out of the store when the round starts, so edits
/// made to the store afterwards don't change an in-progress round.
#[derive(Debug, Clone)]
pub struct PlayRound {
    quizzes: Vec<Quiz>,
    /// Ids not asked yet.
    pending: Vec<usize>,
    /// Position in `pending` of the question waiting for an answer.
    outstanding: Option<usize>,
    score: usize,
    state: PlayState,
}

impl PlayRound {
    pub fn new(store: &QuizStore) -> Self {
        let quizzes: Vec<Quiz> = store.get_all().map(|(_, quiz)| quiz.clone()).collect();
        let pending: Vec<usize> = (0..quizzes.len()).collect();
        let state = if pending.is_empty() {
            PlayState::Finished(FinishReason::Exhausted)
        } else {
            PlayState::Asking
        };

        Self {
            quizzes,
            pending,
            outstanding: None,
            score: 0,
            state,
        }
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of quizzes not answered correctly yet.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// The final summary, once the round is finished.
    pub fn summary(&self) -> Option<PlaySummary> {
        match self.state {
            PlayState::Asking => None,
            PlayState::Finished(reason) => Some(PlaySummary {
                score: self.score,
                reason,
            }),
        }
    }

    /// Pick the next question uniformly among the pending ones.
    ///
    /// While a question is waiting for its answer the same question is
    /// returned again instead of drawing a new one. Returns `None` once the
    /// round is finished.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, &Quiz)> {
        if self.state != PlayState::Asking {
            return None;
        }

        let slot = match self.outstanding {
            Some(slot) => slot,
            None => {
                let slot = rng.gen_range(0..self.pending.len());
                self.outstanding = Some(slot);
                slot
            }
        };

        let id = self.pending[slot];
        Some((id, &self.quizzes[id]))
    }

    /// Answer the outstanding question.
    ///
    /// Returns `None` if no question is waiting for an answer.
    pub fn answer(&mut self, reply: &str) -> Option<Verdict> {
        let slot = self.outstanding.take()?;
        let id = self.pending[slot];
        let verdict = Verdict::from_match(self.quizzes[id].is_correct(reply));

        if verdict.is_correct() {
            self.score += 1;
            self.pending.swap_remove(slot);
            if self.pending.is_empty() {
                self.state = PlayState::Finished(FinishReason::Exhausted);
            }
        } else {
            self.state = PlayState::Finished(FinishReason::WrongAnswer);
        }

        Some(verdict)
    }
}

/// Ask every quiz in the store in random order until one is answered wrong.
///
/// Returns `Ok(None)` if input is closed before the round finishes.
pub async fn play<C, R>(
    store: &QuizStore,
    console: &mut C,
    rng: &mut R,
) -> io::Result<Option<PlaySummary>>
where
    C: Console,
    R: Rng + ?Sized,
{
    let mut round = PlayRound::new(store);
    log::info!("Starting play session with {} quizzes", round.remaining());

    while let Some((id, quiz)) = round.next_question(rng) {
        log::debug!("Asking quiz {}", id);
        let label = ui::question_prompt(quiz);
        let Some(reply) = console.prompt_for_text(&label, None).await? else {
            log::info!("Input closed during play session");
            return Ok(None);
        };

        match round.answer(&reply) {
            Some(Verdict::Correct) => {
                console.display_line(&format!("CORRECT - Correct answers: {}", round.score()));
            }
            Some(Verdict::Incorrect) => console.display_line("INCORRECT"),
            None => {}
        }
    }

    let summary = round.summary().unwrap_or(PlaySummary {
        score: round.score(),
        reason: FinishReason::Exhausted,
    });

    match summary.reason {
        FinishReason::Exhausted => console.display_line("No questions left. End of game. Score:"),
        FinishReason::WrongAnswer => console.display_line("End of game. Score:"),
    }
    console.display_banner(&summary.score.to_string());
    log::info!(
        "Play session finished with score {} ({:?})",
        summary.score,
        summary.reason
    );

    Ok(Some(summary))
}
