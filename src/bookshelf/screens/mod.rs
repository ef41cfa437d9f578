//! # Screens
//!
//! The concrete menus of the catalog application, built on [`crate::menu`].
//!
//! ```text
//! RootMenu ──► BookMenu            (find by id)
//!          ──► BooksListMenu ──► BookMenu   (list, open)
//!          ──► SearchMenu ──► BooksListMenu (search results)
//! ```
//!
//! Every screen reads the catalog through [`AppContext`] at render time, so
//! what is shown always reflects the current storage. Handlers talk to the
//! catalog only through [`BookshelfApi`] and print only through the host.

use crate::api::{user_message, BookshelfApi, CmdMessage, CmdResult, MessageLevel};
use crate::error::Result;
use crate::menu::console::Tone;
use crate::menu::MenuHost;
use crate::pagination::DEFAULT_PAGE_SIZE;

pub mod book;
pub mod list;
pub mod root;
pub mod search;

pub use book::BookMenu;
pub use list::BooksListMenu;
pub use root::RootMenu;
pub use search::SearchMenu;

/// State shared by every screen.
#[derive(Debug)]
pub struct AppContext {
    pub api: BookshelfApi,
    pub page_size: usize,
}

impl AppContext {
    pub fn new(api: BookshelfApi) -> Self {
        Self {
            api,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

pub type Host = MenuHost<AppContext>;

impl From<MessageLevel> for Tone {
    fn from(level: MessageLevel) -> Self {
        match level {
            MessageLevel::Info => Tone::Info,
            MessageLevel::Success => Tone::Success,
            MessageLevel::Warning => Tone::Warning,
            MessageLevel::Error => Tone::Error,
        }
    }
}

pub fn show_messages(host: &mut Host, messages: &[CmdMessage]) -> Result<()> {
    for message in messages {
        host.notify(message.level.into(), &message.content)?;
    }
    Ok(())
}

/// Print the outcome of an API call. Errors the user can act on become
/// messages and yield `None`; anything else propagates.
pub(crate) fn report(host: &mut Host, result: Result<CmdResult>) -> Result<Option<CmdResult>> {
    match result {
        Ok(result) => {
            show_messages(host, &result.messages)?;
            Ok(Some(result))
        }
        Err(e) => {
            let message = user_message(e)?;
            show_messages(host, &[message])?;
            Ok(None)
        }
    }
}
