use super::console::{Console, Tone};
use super::Menu;
use crate::error::{Result, ShelfError};
use crate::input::input_validated;
use tracing::{debug, warn};

const SELECTION_PROMPT: &str = "Select an option: ";

/// Owns the menu stack, the application context and the console.
pub struct MenuHost<C> {
    stack: Vec<Box<dyn Menu<C>>>,
    context: C,
    console: Box<dyn Console>,
}

impl<C> MenuHost<C> {
    pub fn new(context: C, console: impl Console + 'static) -> Self {
        Self {
            stack: Vec::new(),
            context,
            console: Box::new(console),
        }
    }

    pub fn push(&mut self, menu: impl Menu<C> + 'static) {
        self.stack.push(Box::new(menu));
        debug!(depth = self.stack.len(), "menu pushed");
    }

    pub fn pop(&mut self) -> Result<()> {
        self.stack.pop().ok_or(ShelfError::EmptyStack)?;
        debug!(depth = self.stack.len(), "menu popped");
        Ok(())
    }

    pub fn current(&self) -> Result<&dyn Menu<C>> {
        self.stack
            .last()
            .map(|menu| menu.as_ref())
            .ok_or(ShelfError::EmptyStack)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    pub fn message(&mut self, text: &str) -> Result<()> {
        self.notify(Tone::Plain, text)
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.notify(Tone::Error, text)
    }

    pub fn notify(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.console.write_line(text, tone)?;
        Ok(())
    }

    /// Prompt until the input converts and validates. `None` if the user cancelled.
    pub fn input<T, E>(
        &mut self,
        prompt: &str,
        convert: impl FnMut(&str) -> std::result::Result<T, E>,
        validate: impl FnMut(&T) -> bool,
        error_message: &str,
    ) -> Result<Option<T>> {
        input_validated(
            self.console.as_mut(),
            prompt,
            convert,
            validate,
            error_message,
        )
    }

    /// Drive menus until the stack is empty.
    ///
    /// With `start`, the stack is cleared and `start` becomes the only menu.
    /// Without it, the existing stack is resumed. Returns
    /// [`ShelfError::InputClosed`] if input ends while waiting for a selection.
    pub fn run(&mut self, start: Option<Box<dyn Menu<C>>>) -> Result<()> {
        if let Some(menu) = start {
            self.stack.clear();
            self.stack.push(menu);
        }
        if self.stack.is_empty() {
            return Err(ShelfError::EmptyStack);
        }

        while !self.stack.is_empty() {
            let (text, entries) = {
                let menu = self.current()?;
                (menu.text(&self.context), menu.entries(&self.context))
            };

            self.console.write_line("", Tone::Plain)?;
            self.console.write_line(&text, Tone::Plain)?;
            for (i, entry) in entries.iter().enumerate() {
                self.console
                    .write_line(&format!("{}. {}", i + 1, entry.text()), Tone::Plain)?;
            }

            let Some(raw) = self.console.read_line(SELECTION_PROMPT)? else {
                return Err(ShelfError::InputClosed);
            };
            let Some(entry) = parse_selection(&raw, entries.len()).map(|i| &entries[i]) else {
                self.console.write_line(
                    &format!("{} - not a valid option.", raw.trim()),
                    Tone::Error,
                )?;
                continue;
            };

            if let Err(e) = entry.on_selected(self) {
                if !e.is_recoverable() {
                    return Err(e);
                }
                warn!(error = %e, "menu action failed");
                self.error(&format!("Error: {}", e))?;
            }
        }

        Ok(())
    }
}

/// Zero-based index for a 1-based selection in `[1, count]`.
fn parse_selection(raw: &str, count: usize) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Some(n - 1),
        _ => None,
    }
}
