use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStorage;

pub fn run(storage: &BookStorage) -> Result<CmdResult> {
    let books = storage.all();
    let mut result = CmdResult::default();
    if books.is_empty() {
        result.add_message(CmdMessage::info("No books yet."));
    }
    Ok(result.with_listed_books(books))
}
