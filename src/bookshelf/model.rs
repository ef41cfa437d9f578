use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BookStatus {
    #[default]
    InStorage,
    Loaned,
}

impl BookStatus {
    pub fn code(self) -> i64 {
        match self {
            BookStatus::InStorage => 0,
            BookStatus::Loaned => 1,
        }
    }

    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(BookStatus::InStorage),
            1 => Ok(BookStatus::Loaned),
            other => Err(ShelfError::InvalidStatus(other)),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BookStatus::InStorage => BookStatus::Loaned,
            BookStatus::Loaned => BookStatus::InStorage,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookStatus::InStorage => write!(f, "In storage"),
            BookStatus::Loaned => write!(f, "Loaned"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: BookStatus,
}

impl Book {
    pub(crate) fn new(id: u64, title: String, author: String, year: i64) -> Self {
        Self {
            id,
            title,
            author,
            year,
            status: BookStatus::InStorage,
        }
    }

    /// Storage-assigned identifier. Never changes once issued.
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// On-disk shape of a single book. The status stays a raw integer here so an
/// unknown code surfaces as [`ShelfError::InvalidStatus`] instead of a parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BookRecord {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i64,
    pub status: i64,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            year: book.year,
            status: book.status.code(),
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = ShelfError;

    fn try_from(record: BookRecord) -> Result<Self> {
        let mut book = Book::new(record.id, record.title, record.author, record.year);
        book.status = BookStatus::from_code(record.status)?;
        Ok(book)
    }
}
