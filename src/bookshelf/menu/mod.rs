//! # Menu Engine
//!
//! Text menus driven by a stack. The top of the stack is the menu on screen;
//! entry handlers push new menus (drill down) or pop the current one (go
//! back). The application ends when the last menu is popped.
//!
//! ```text
//!   MenuHost::run(root)
//!     ┌──────────────────────────────────────────┐
//!     │ render current().text + entries          │
//!     │ read selection ── invalid ──► error, retry│
//!     │ entry.on_selected(host) ─► push/pop/...  │
//!     └──────── loop while stack not empty ──────┘
//! ```
//!
//! Menus are generic over a context `C`, the application state the host
//! carries and lends to handlers through [`MenuHost::context_mut`]. Menus
//! never touch stdin/stdout directly; all I/O goes through the host and its
//! [`console::Console`].
//!
//! `text` and `entries` are recomputed on every render, so a menu can keep
//! internal state (a page number, a pending filter) that changes what it
//! shows while it stays on the stack.

pub mod console;
pub mod entries;
pub mod host;

pub use entries::{MenuEntryBack, StaticMenu, StaticMenuEntry};
pub use host::MenuHost;

use crate::error::Result;

pub trait Menu<C> {
    fn text(&self, ctx: &C) -> String;

    fn entries(&self, ctx: &C) -> Vec<Box<dyn MenuEntry<C>>>;
}

pub trait MenuEntry<C> {
    fn text(&self) -> String;

    fn on_selected(&self, host: &mut MenuHost<C>) -> Result<()>;
}
