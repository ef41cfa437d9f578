use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStorage;

pub fn run(
    storage: &mut BookStorage,
    title: String,
    author: String,
    year: i64,
) -> Result<CmdResult> {
    let book = storage.create(title, author, year)?;
    let message = CmdMessage::success(format!("Book added (id {}): {}", book.id(), book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookStatus;

    #[test]
    fn creates_book_in_storage() {
        let mut storage = BookStorage::new();
        let result = run(&mut storage, "Dune".into(), "Frank Herbert".into(), 1965).unwrap();

        assert_eq!(storage.count(), 1);
        let book = &result.affected_books[0];
        assert_eq!(book.id(), 0);
        assert_eq!(book.status, BookStatus::InStorage);
        assert_eq!(result.messages[0].content, "Book added (id 0): Dune");
    }
}
