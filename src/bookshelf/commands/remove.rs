use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::BookStorage;

pub fn run(storage: &mut BookStorage, id: u64) -> Result<CmdResult> {
    let book = storage.remove(id)?;
    let message = CmdMessage::success(format!("Book removed (id {}): {}", id, book.title));
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}
