//! Presentation layer used by the command loop.
//!
//! The core never prints directly: it asks a [`Console`] for input and hands
//! it lines to show. [`crate::terminal::TerminalConsole`] talks to the real
//! terminal, [`ScriptedConsole`] replays canned answers and records output.

use std::collections::VecDeque;
use std::io;

/// Input/output surface for the command loop.
///
/// Every method takes `&mut self`, so a caller can never have two prompts
/// outstanding at once.
#[allow(async_fn_in_trait)]
pub trait Console {
    /// Ask the user for a line of text and wait for it.
    ///
    /// `default` is the current value when editing; how it is shown is up to
    /// the implementation. Returns `Ok(None)` once input is closed.
    async fn prompt_for_text(
        &mut self,
        label: &str,
        default: Option<&str>,
    ) -> io::Result<Option<String>>;

    fn display_line(&mut self, text: &str);

    fn display_error(&mut self, text: &str);

    /// Show a short result (score, verdict) prominently.
    fn display_banner(&mut self, text: &str);
}

/// One recorded interaction with a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Prompt(String),
    Line(String),
    Error(String),
    Banner(String),
}

/// A console fed from a fixed list of replies.
///
/// Once the replies run out, prompts report closed input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    output: Vec<Output>,
}

impl ScriptedConsole {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Everything shown or asked so far, in order.
    pub fn output(&self) -> &[Output] {
        &self.output
    }

    /// Labels of every prompt issued so far.
    pub fn prompts(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Prompt(label) => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Line(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Error(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn banners(&self) -> Vec<&str> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Banner(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Replies not consumed yet.
    pub fn remaining_replies(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    async fn prompt_for_text(
        &mut self,
        label: &str,
        _default: Option<&str>,
    ) -> io::Result<Option<String>> {
        self.output.push(Output::Prompt(label.to_string()));
        Ok(self.replies.pop_front())
    }

    fn display_line(&mut self, text: &str) {
        self.output.push(Output::Line(text.to_string()));
    }

    fn display_error(&mut self, text: &str) {
        self.output.push(Output::Error(text.to_string()));
    }

    fn display_banner(&mut self, text: &str) {
        self.output.push(Output::Banner(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_console_replays_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);
        assert_eq!(
            console.prompt_for_text("a", None).await.unwrap().as_deref(),
            Some("first")
        );
        assert_eq!(
            console.prompt_for_text("b", Some("x")).await.unwrap().as_deref(),
            Some("second")
        );
        assert_eq!(console.prompt_for_text("c", None).await.unwrap(), None);
        assert_eq!(console.prompts(), vec!["a", "b", "c"]);
        assert_eq!(console.remaining_replies(), 0);
    }

    #[test]
    fn test_scripted_console_records_output() {
        let mut console = ScriptedConsole::default();
        console.display_line("line");
        console.display_error("oops");
        console.display_banner("7");
        assert_eq!(
            console.output(),
            &[
                Output::Line("line".into()),
                Output::Error("oops".into()),
                Output::Banner("7".into()),
            ]
        );
    }
}
