//! # Storage Layer
//!
//! [`BookStorage`] is the exclusive owner of every [`Book`] it creates. Books
//! are keyed by a storage-assigned id drawn from a monotonically increasing
//! counter, so ids are never reused, not even after a removal.
//!
//! The storage itself is purely in-memory. Persistence lives in [`fs`], which
//! adds `save`/`load` against the JSON layout:
//!
//! ```text
//! {
//!   "books": [
//!     { "id": 0, "title": "...", "author": "...", "year": 1965, "status": 0 }
//!   ]
//! }
//! ```
//!
//! ## Removal notifications
//!
//! Observers interested in removals subscribe through [`BookStorage::on_removed`].
//! Screens holding a snapshot of ids subscribe weakly, so their subscription
//! disappears together with the screen.

use crate::error::{Result, ShelfError};
use crate::events::Event;
use crate::model::{Book, BookStatus};
use crate::search::SearchCondition;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

pub mod fs;

#[derive(Default)]
pub struct BookStorage {
    books: BTreeMap<u64, Book>,
    next_id: u64,
    removed: Event<Book>,
}

impl BookStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new book under the next free id.
    ///
    /// `next_id` must stay strictly above every stored id, so the last
    /// representable id is never handed out.
    pub fn create(&mut self, title: String, author: String, year: i64) -> Result<Book> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or(ShelfError::IdsExhausted)?;
        let book = Book::new(id, title, author, year);
        self.next_id = next_id;
        debug!(id, title = %book.title, "book created");
        self.books.insert(id, book.clone());
        Ok(book)
    }

    pub fn remove(&mut self, id: u64) -> Result<Book> {
        let book = self.books.remove(&id).ok_or(ShelfError::NotFound(id))?;
        debug!(id, "book removed");
        self.removed.emit(&book);
        Ok(book)
    }

    pub fn set_status(&mut self, id: u64, status: BookStatus) -> Result<Book> {
        let book = self.books.get_mut(&id).ok_or(ShelfError::NotFound(id))?;
        book.status = status;
        Ok(book.clone())
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn find_by_id(&self, id: u64) -> Result<&Book> {
        self.books.get(&id).ok_or(ShelfError::NotFound(id))
    }

    pub fn exists(&self, id: u64) -> bool {
        self.books.contains_key(&id)
    }

    pub fn ids(&self) -> BTreeSet<u64> {
        self.books.keys().copied().collect()
    }

    /// Snapshot of every stored book, in ascending id order.
    pub fn all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    pub fn search(&self, condition: &SearchCondition) -> Vec<Book> {
        self.books
            .values()
            .filter(|book| condition.matches(book))
            .cloned()
            .collect()
    }

    /// The id the next `create` will hand out.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn on_removed(&mut self) -> &mut Event<Book> {
        &mut self.removed
    }

    fn from_books(books: impl IntoIterator<Item = Book>) -> Result<Self> {
        let books: BTreeMap<u64, Book> = books.into_iter().map(|b| (b.id(), b)).collect();
        let next_id = match books.keys().next_back() {
            None => 0,
            Some(&max) => max.checked_add(1).ok_or_else(|| {
                ShelfError::Format(format!("book id {} leaves no room for new ids", max))
            })?,
        };
        Ok(Self {
            books,
            next_id,
            removed: Event::new(),
        })
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StorageFixture {
        pub storage: BookStorage,
    }

    impl Default for StorageFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StorageFixture {
        pub fn new() -> Self {
            Self {
                storage: BookStorage::new(),
            }
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                self.storage
                    .create(
                        format!("Book {}", i + 1),
                        format!("Author {}", i + 1),
                        2000 + i as i64,
                    )
                    .unwrap();
            }
            self
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i64) -> Self {
            self.storage
                .create(title.into(), author.into(), year)
                .unwrap();
            self
        }

        pub fn with_loaned_book(mut self, title: &str, author: &str, year: i64) -> Self {
            let book = self
                .storage
                .create(title.into(), author.into(), year)
                .unwrap();
            self.storage
                .set_status(book.id(), BookStatus::Loaned)
                .unwrap();
            self
        }
    }
}
