//! # API Facade
//!
//! [`BookshelfApi`] is the single entry point the screens use. It dispatches
//! to the command functions in [`crate::commands`] and owns the two concerns
//! commands know nothing about: where the catalog lives on disk, and when it
//! gets written there ([`SavePolicy`]).
//!
//! Like the commands, the API never prints. Everything user-facing comes back
//! as [`CmdMessage`]s inside a [`CmdResult`].

use crate::commands;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookStatus};
use crate::search::SearchCondition;
use crate::store::BookStorage;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::config::SavePolicy;

pub struct BookshelfApi {
    storage: BookStorage,
    path: PathBuf,
    policy: SavePolicy,
}

impl BookshelfApi {
    pub fn new(storage: BookStorage, path: impl Into<PathBuf>, policy: SavePolicy) -> Self {
        Self {
            storage,
            path: path.into(),
            policy,
        }
    }

    /// Load the catalog at `path`.
    ///
    /// A missing file starts an empty catalog. A file that cannot be read or
    /// parsed is reported in the returned messages and also replaced by an
    /// empty catalog, so startup never fails on bad data.
    pub fn open(path: impl Into<PathBuf>, policy: SavePolicy) -> (Self, Vec<CmdMessage>) {
        let path = path.into();
        let mut messages = Vec::new();
        let storage = match BookStorage::load_or_default(&path) {
            Ok(storage) => storage,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load catalog, starting empty");
                messages.push(CmdMessage::warning(format!(
                    "Could not load {} ({}). Starting with an empty catalog.",
                    path.display(),
                    e
                )));
                BookStorage::new()
            }
        };
        (Self::new(storage, path, policy), messages)
    }

    pub fn add_book(&mut self, title: String, author: String, year: i64) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.storage, title, author, year)?;
        self.after_mutation()?;
        Ok(result)
    }

    pub fn remove_book(&mut self, id: u64) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.storage, id)?;
        self.after_mutation()?;
        Ok(result)
    }

    pub fn set_status(&mut self, id: u64, status: BookStatus) -> Result<CmdResult> {
        let result = commands::status::set(&mut self.storage, id, status)?;
        self.after_mutation()?;
        Ok(result)
    }

    pub fn toggle_status(&mut self, id: u64) -> Result<CmdResult> {
        let result = commands::status::toggle(&mut self.storage, id)?;
        self.after_mutation()?;
        Ok(result)
    }

    pub fn get_book(&self, id: u64) -> Result<CmdResult> {
        commands::get::run(&self.storage, id)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.storage)
    }

    pub fn search_books(&self, condition: &SearchCondition) -> Result<CmdResult> {
        commands::search::run(&self.storage, condition)
    }

    pub fn find(&self, id: u64) -> Option<&Book> {
        self.storage.find_by_id(id).ok()
    }

    /// Write the catalog regardless of the save policy.
    pub fn persist(&self) -> Result<CmdResult> {
        self.storage.save(&self.path)?;
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Saved {} book(s) to {}",
            self.storage.count(),
            self.path.display()
        ))))
    }

    pub fn storage(&self) -> &BookStorage {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut BookStorage {
        &mut self.storage
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> SavePolicy {
        self.policy
    }

    fn after_mutation(&self) -> Result<()> {
        match self.policy {
            SavePolicy::EveryMutation => {
                debug!(path = %self.path.display(), "saving after mutation");
                self.storage.save(&self.path)
            }
            SavePolicy::OnExit => Ok(()),
        }
    }
}

impl std::fmt::Debug for BookshelfApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookshelfApi")
            .field("books", &self.storage.count())
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish()
    }
}

/// Maps an API error the user can act on into a message; other errors pass through.
pub fn user_message(err: ShelfError) -> Result<CmdMessage> {
    match err {
        ShelfError::NotFound(id) => Ok(CmdMessage::error(format!("No book with id {}.", id))),
        other => Err(other),
    }
}
