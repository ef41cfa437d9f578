use super::BookStorage;
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
struct StorageDocument {
    books: Vec<BookRecord>,
}

impl BookStorage {
    /// Write the whole collection to `path`.
    ///
    /// The document is written to a temporary sibling first and renamed into
    /// place, so a crash mid-write never leaves a truncated data file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(ShelfError::Io)?;
        }

        let doc = StorageDocument {
            books: self.books.values().map(BookRecord::from).collect(),
        };
        let content = serde_json::to_string_pretty(&doc).map_err(ShelfError::Serialization)?;

        let tmp_file = dir.join(format!(".books-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }

        debug!(path = %path.display(), books = self.count(), "storage saved");
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(ShelfError::Io)?;
        let doc: StorageDocument =
            serde_json::from_str(&content).map_err(|e| ShelfError::Format(e.to_string()))?;

        let books = doc
            .books
            .into_iter()
            .map(Book::try_from)
            .collect::<Result<Vec<_>>>()?;
        let storage = Self::from_books(books)?;

        debug!(path = %path.display(), books = storage.count(), "storage loaded");
        Ok(storage)
    }

    /// Like [`BookStorage::load`], but a missing file is a fresh, empty storage.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        match Self::load(path) {
            Err(ShelfError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(Self::new()),
            other => other,
        }
    }
}
