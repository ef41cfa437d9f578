use super::{Menu, MenuEntry, MenuHost};
use crate::error::Result;
use std::rc::Rc;

type Handler<C> = Rc<dyn Fn(&mut MenuHost<C>) -> Result<()>>;

/// Entry with fixed text whose handler is a closure.
pub struct StaticMenuEntry<C> {
    text: String,
    handler: Handler<C>,
}

impl<C> StaticMenuEntry<C> {
    pub fn new(
        text: impl Into<String>,
        handler: impl Fn(&mut MenuHost<C>) -> Result<()> + 'static,
    ) -> Self {
        Self {
            text: text.into(),
            handler: Rc::new(handler),
        }
    }

    pub fn boxed(
        text: impl Into<String>,
        handler: impl Fn(&mut MenuHost<C>) -> Result<()> + 'static,
    ) -> Box<dyn MenuEntry<C>>
    where
        C: 'static,
    {
        Box::new(Self::new(text, handler))
    }
}

impl<C> Clone for StaticMenuEntry<C> {
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<C> MenuEntry<C> for StaticMenuEntry<C> {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn on_selected(&self, host: &mut MenuHost<C>) -> Result<()> {
        (self.handler)(host)
    }
}

/// Returns to the previous menu.
#[derive(Debug, Clone)]
pub struct MenuEntryBack {
    text: String,
}

impl MenuEntryBack {
    pub fn new() -> Self {
        Self::with_text("Back")
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn boxed<C>() -> Box<dyn MenuEntry<C>> {
        Box::new(Self::new())
    }
}

impl Default for MenuEntryBack {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> MenuEntry<C> for MenuEntryBack {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn on_selected(&self, host: &mut MenuHost<C>) -> Result<()> {
        host.pop()
    }
}

/// Menu with fixed text and entries.
pub struct StaticMenu<C> {
    text: String,
    entries: Vec<StaticMenuEntry<C>>,
}

impl<C> StaticMenu<C> {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entries: Vec::new(),
        }
    }

    pub fn entry(
        mut self,
        text: impl Into<String>,
        handler: impl Fn(&mut MenuHost<C>) -> Result<()> + 'static,
    ) -> Self {
        self.entries.push(StaticMenuEntry::new(text, handler));
        self
    }

    pub fn back(self, text: impl Into<String>) -> Self {
        self.entry(text, |host| host.pop())
    }
}

impl<C: 'static> Menu<C> for StaticMenu<C> {
    fn text(&self, _ctx: &C) -> String {
        self.text.clone()
    }

    fn entries(&self, _ctx: &C) -> Vec<Box<dyn MenuEntry<C>>> {
        self.entries
            .iter()
            .map(|e| Box::new(e.clone()) as Box<dyn MenuEntry<C>>)
            .collect()
    }
}
