//! Command parser and executor.
//!
//! Handles the commands typed at the `quiz >` prompt: `list`, `show`, `add`,
//! `play`, etc.

use std::io;

use crate::app::App;
use crate::console::Console;
use crate::session::{play, test_quiz};
use crate::ui;
use crate::QuizError;

/// Result of executing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    /// Go back to the command prompt.
    Continue,
    /// The session should end.
    Quit,
}

/// Parse and execute a command.
///
/// Missing or invalid ids are reported on the console and the command is
/// abandoned; only I/O failures are returned as errors.
pub async fn execute_command<C: Console>(
    app: &mut App,
    console: &mut C,
    input: &str,
) -> io::Result<CommandResult> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(CommandResult::Continue);
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    let command = parts[0].to_lowercase();
    let id = parts.get(1).copied();

    let result = match command.as_str() {
        "h" | "help" => cmd_help(console),
        "list" => cmd_list(app, console),
        "show" => cmd_show(app, console, id),
        "add" => cmd_add(app, console).await,
        "delete" => cmd_delete(app, console, id),
        "edit" => cmd_edit(app, console, id).await,
        "test" => cmd_test(app, console, id).await,
        "p" | "play" => cmd_play(app, console).await,
        "credits" => cmd_credits(console),
        "q" | "quit" => Ok(CommandResult::Quit),
        _ => {
            console.display_error(&format!(
                "Unknown command: {}. Type 'help' for available commands.",
                command
            ));
            Ok(CommandResult::Continue)
        }
    };

    match result {
        Ok(result) => Ok(result),
        Err(QuizError::Io(e)) => Err(e),
        Err(e) => {
            log::warn!("Command '{}' failed: {}", input, e);
            console.display_error(&e.to_string());
            Ok(CommandResult::Continue)
        }
    }
}

/// Reply to an `edit` prompt that sets the field to the empty string.
const CLEAR_FIELD: &str = "-";

fn require_id(id: Option<&str>) -> Result<&str, QuizError> {
    id.ok_or(QuizError::MissingArgument("id"))
}

/// Show help.
fn cmd_help<C: Console>(console: &mut C) -> Result<CommandResult, QuizError> {
    for line in ui::HELP {
        console.display_line(line);
    }
    Ok(CommandResult::Continue)
}

/// List every quiz with its id.
fn cmd_list<C: Console>(app: &App, console: &mut C) -> Result<CommandResult, QuizError> {
    for (id, quiz) in app.store().get_all() {
        console.display_line(&ui::list_entry(id, quiz));
    }
    Ok(CommandResult::Continue)
}

/// Show the question and answer of one quiz.
fn cmd_show<C: Console>(
    app: &App,
    console: &mut C,
    id: Option<&str>,
) -> Result<CommandResult, QuizError> {
    let id = require_id(id)?;
    let quiz = app.store().get_by_index(id)?;
    console.display_line(&ui::show_entry(id, quiz));
    Ok(CommandResult::Continue)
}

/// Ask for a question and an answer, then append the new quiz.
async fn cmd_add<C: Console>(app: &mut App, console: &mut C) -> Result<CommandResult, QuizError> {
    let Some(question) = console.prompt_for_text("Enter a question: ", None).await? else {
        return Ok(CommandResult::Quit);
    };
    let Some(answer) = console.prompt_for_text("Enter the answer: ", None).await? else {
        return Ok(CommandResult::Quit);
    };

    console.display_line(&format!("Added: {} => {}", question, answer));
    app.store_mut().add(question, answer);
    Ok(CommandResult::Continue)
}

/// Delete one quiz. Later quizzes move down one id.
fn cmd_delete<C: Console>(
    app: &mut App,
    console: &mut C,
    id: Option<&str>,
) -> Result<CommandResult, QuizError> {
    let id = require_id(id)?;
    let quiz = app.store_mut().delete_by_index(id)?;
    console.display_line(&format!("Deleted {}", ui::show_entry(id, &quiz)));
    Ok(CommandResult::Continue)
}

/// Value to store after an edit prompt: an empty reply keeps the current
/// value and a lone `-` clears it.
fn edited_value(reply: String, current: String) -> String {
    match reply.as_str() {
        "" => current,
        CLEAR_FIELD => String::new(),
        _ => reply,
    }
}

/// Replace the question and answer of one quiz.
///
/// The current values are offered as defaults; an empty reply keeps them and
/// `-` clears them.
async fn cmd_edit<C: Console>(
    app: &mut App,
    console: &mut C,
    id: Option<&str>,
) -> Result<CommandResult, QuizError> {
    let id = require_id(id)?;
    let current = app.store().get_by_index(id)?.clone();

    let Some(question) = console
        .prompt_for_text("Enter a question: ", Some(&current.question))
        .await?
    else {
        return Ok(CommandResult::Quit);
    };
    let Some(answer) = console
        .prompt_for_text("Enter the answer: ", Some(&current.answer))
        .await?
    else {
        return Ok(CommandResult::Quit);
    };

    let question = edited_value(question, current.question);
    let answer = edited_value(answer, current.answer);

    console.display_line(&format!(
        "Quiz {} changed to: {} => {}",
        id, question, answer
    ));
    app.store_mut().update(id, question, answer)?;
    Ok(CommandResult::Continue)
}

/// Ask a single quiz.
async fn cmd_test<C: Console>(
    app: &App,
    console: &mut C,
    id: Option<&str>,
) -> Result<CommandResult, QuizError> {
    let id = require_id(id)?;
    match test_quiz(app.store(), id, console).await? {
        Some(_) => Ok(CommandResult::Continue),
        None => Ok(CommandResult::Quit),
    }
}

/// Ask every quiz in random order.
async fn cmd_play<C: Console>(app: &mut App, console: &mut C) -> Result<CommandResult, QuizError> {
    let (store, rng) = app.store_and_rng();
    match play(store, console, rng).await? {
        Some(_) => Ok(CommandResult::Continue),
        None => Ok(CommandResult::Quit),
    }
}

/// Show the credits.
fn cmd_credits<C: Console>(console: &mut C) -> Result<CommandResult, QuizError> {
    for line in ui::CREDITS {
        console.display_line(line);
    }
    Ok(CommandResult::Continue)
}
