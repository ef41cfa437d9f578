use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::SearchCondition;
use crate::store::BookStorage;

pub fn run(storage: &BookStorage, condition: &SearchCondition) -> Result<CmdResult> {
    let found = storage.search(condition);
    let message = match found.len() {
        0 => CmdMessage::info("No books match the search."),
        1 => CmdMessage::info("Found 1 book."),
        n => CmdMessage::info(format!("Found {} books.", n)),
    };
    Ok(CmdResult::default()
        .with_listed_books(found)
        .with_message(message))
}
