//! Terminal implementation of [`Console`]: line input from stdin, colored
//! output on stdout/stderr.

use std::io::{self, Stderr, Stdout, Write};

use crossterm::queue;
use crossterm::style::{style, Color, PrintStyledContent, StyledContent, Stylize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::console::Console;

pub struct TerminalConsole<R = BufReader<Stdin>, W = Stdout, E = Stderr> {
    input: R,
    stdout: W,
    stderr: E,
    color: bool,
}

impl TerminalConsole {
    /// Console reading from stdin and writing to stdout/stderr.
    pub fn new(color: bool) -> Self {
        Self::with_io(
            BufReader::new(tokio::io::stdin()),
            io::stdout(),
            io::stderr(),
            color,
        )
    }
}

impl<R, W, E> TerminalConsole<R, W, E>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    pub fn with_io(input: R, stdout: W, stderr: E, color: bool) -> Self {
        Self {
            input,
            stdout,
            stderr,
            color,
        }
    }

    fn paint(&self, text: impl Into<String>, color: Color) -> StyledContent<String> {
        let text = text.into();
        if self.color { text.with(color) } else { style(text) }
    }

    /// Read one line, without its line ending. Bytes that aren't valid UTF-8
    /// are replaced rather than rejected.
    async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn print_line(&mut self, content: StyledContent<String>) -> io::Result<()> {
        queue!(self.stdout, PrintStyledContent(content))?;
        writeln!(self.stdout)?;
        self.stdout.flush()
    }

    fn print_error(&mut self, content: StyledContent<String>) -> io::Result<()> {
        queue!(self.stderr, PrintStyledContent(content))?;
        writeln!(self.stderr)?;
        self.stderr.flush()
    }
}

impl<R, W, E> Console for TerminalConsole<R, W, E>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    E: Write,
{
    async fn prompt_for_text(
        &mut self,
        label: &str,
        default: Option<&str>,
    ) -> io::Result<Option<String>> {
        let label = self.paint(label, Color::Red);
        queue!(self.stdout, PrintStyledContent(label))?;
        if let Some(default) = default {
            let hint = self.paint(format!("[{default}] "), Color::DarkGrey);
            queue!(self.stdout, PrintStyledContent(hint))?;
        }
        self.stdout.flush()?;

        let line = self.read_line().await?;
        if line.is_none() {
            // Keep the shell prompt off our last line after Ctrl-D.
            writeln!(self.stdout)?;
        }
        Ok(line)
    }

    fn display_line(&mut self, text: &str) {
        if let Err(e) = self.print_line(style(text.to_string())) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }

    fn display_error(&mut self, text: &str) {
        let content = self.paint(format!("Error: {text}"), Color::Red);
        if let Err(e) = self.print_error(content) {
            log::warn!("Failed to write to stderr: {}", e);
        }
    }

    fn display_banner(&mut self, text: &str) {
        let banner = self.paint(format!("  {text}  "), Color::Green);
        let banner = if self.color { banner.bold() } else { banner };
        if let Err(e) = self.print_line(banner) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }
}
