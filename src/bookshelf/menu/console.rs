//! The line-oriented terminal the menu host talks to.
//!
//! [`StdConsole`] is the production implementation over stdin/stdout.
//! `ScriptedConsole` (tests and the `test_utils` feature) replays a fixed list
//! of lines and records everything written, which is how menus and screens
//! are exercised in tests.

use colored::Colorize;
use std::io::{self, BufRead, Write};
#[cfg(any(test, feature = "test_utils"))]
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

pub trait Console {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// `Ok(None)` means the read was cancelled (end of input).
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, text: &str, tone: Tone) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let line = read_line_lossy(&mut io::stdin().lock())?;
        if line.is_none() {
            println!();
        }
        Ok(line)
    }

    fn write_line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match tone {
            Tone::Plain => writeln!(stdout, "{}", text),
            Tone::Info => writeln!(stdout, "{}", text.dimmed()),
            Tone::Success => writeln!(stdout, "{}", text.green()),
            Tone::Warning => writeln!(stdout, "{}", text.yellow()),
            Tone::Error => writeln!(stdout, "{}", text.red()),
        }
    }
}

/// One line from `reader` without its terminator, `None` at end of input.
///
/// Bytes that are not UTF-8 come through as replacement characters, leaving
/// the caller to reject the line like any other bad input.
fn read_line_lossy(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    while matches!(buf.last(), Some(b'\n' | b'\r')) {
        buf.pop();
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}

/// Console fed from a script of lines. A `None` in the script, or running out
/// of lines, reads as a cancellation.
///
/// Clones share the same script and recording, so a test can hand one clone to
/// a [`MenuHost`](crate::menu::MenuHost) and inspect the other afterwards.
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    inner: Rc<RefCell<Script>>,
}

#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default)]
struct Script {
    input: VecDeque<Option<String>>,
    prompts: Vec<String>,
    output: Vec<(Tone, String)>,
}

#[cfg(any(test, feature = "test_utils"))]
impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let script = Script {
            input: lines.into_iter().map(|l| Some(l.into())).collect(),
            ..Script::default()
        };
        Self {
            inner: Rc::new(RefCell::new(script)),
        }
    }

    pub fn then(self, line: impl Into<String>) -> Self {
        self.inner.borrow_mut().input.push_back(Some(line.into()));
        self
    }

    pub fn then_cancel(self) -> Self {
        self.inner.borrow_mut().input.push_back(None);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.inner.borrow().prompts.clone()
    }

    pub fn output(&self) -> Vec<String> {
        let script = self.inner.borrow();
        script.output.iter().map(|(_, text)| text.clone()).collect()
    }

    pub fn output_with_tone(&self, tone: Tone) -> Vec<String> {
        let script = self.inner.borrow();
        script
            .output
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, text)| text.clone())
            .collect()
    }

    /// Number of written lines containing `needle`.
    pub fn count_output(&self, needle: &str) -> usize {
        self.output()
            .iter()
            .filter(|text| text.contains(needle))
            .count()
    }

    pub fn transcript(&self) -> String {
        self.output().join("\n")
    }

    pub fn remaining_input(&self) -> usize {
        self.inner.borrow().input.len()
    }
}

#[cfg(any(test, feature = "test_utils"))]
impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut script = self.inner.borrow_mut();
        script.prompts.push(prompt.to_string());
        Ok(script.input.pop_front().flatten())
    }

    fn write_line(&mut self, text: &str, tone: Tone) -> io::Result<()> {
        self.inner
            .borrow_mut()
            .output
            .push((tone, text.to_string()));
        Ok(())
    }
}
