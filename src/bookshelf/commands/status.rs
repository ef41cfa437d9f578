use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookStatus;
use crate::store::BookStorage;

pub fn set(storage: &mut BookStorage, id: u64, status: BookStatus) -> Result<CmdResult> {
    let previous = storage.find_by_id(id)?.status;
    let book = storage.set_status(id, status)?;

    let message = if previous == status {
        CmdMessage::info(format!("'{}' is already: {}", book.title, status))
    } else {
        CmdMessage::success(format!("'{}' is now: {}", book.title, status))
    };
    Ok(CmdResult::default()
        .with_affected_books(vec![book])
        .with_message(message))
}

pub fn toggle(storage: &mut BookStorage, id: u64) -> Result<CmdResult> {
    let status = storage.find_by_id(id)?.status.toggled();
    set(storage, id, status)
}
