use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookStorage;

pub fn run(storage: &BookStorage, id: u64) -> Result<CmdResult> {
    let book = storage.find_by_id(id)?.clone();
    Ok(CmdResult::default().with_listed_books(vec![book]))
}
