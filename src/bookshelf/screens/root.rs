use super::{report, AppContext, BookMenu, BooksListMenu, Host, SearchMenu};
use crate::error::Result;
use crate::input::{always, convert_id, convert_int, convert_string, not_empty};
use crate::menu::{Menu, MenuEntry, StaticMenuEntry};

/// The first screen; popping it ends the session.
#[derive(Debug, Default)]
pub struct RootMenu;

impl RootMenu {
    pub fn new() -> Self {
        Self
    }
}

impl Menu<AppContext> for RootMenu {
    fn text(&self, ctx: &AppContext) -> String {
        format!(
            "Library catalog ({} book(s))\nChoose an action:",
            ctx.api.storage().count()
        )
    }

    fn entries(&self, _ctx: &AppContext) -> Vec<Box<dyn MenuEntry<AppContext>>> {
        vec![
            StaticMenuEntry::boxed("Add book", add_book),
            StaticMenuEntry::boxed("Find book by ID", find_book),
            StaticMenuEntry::boxed("Remove book by ID", remove_book),
            StaticMenuEntry::boxed("List books", list_books),
            StaticMenuEntry::boxed("Search books", |host: &mut Host| {
                host.push(SearchMenu::new());
                Ok(())
            }),
            StaticMenuEntry::boxed("Save now", |host: &mut Host| {
                let result = host.context().api.persist();
                report(host, result)?;
                Ok(())
            }),
            StaticMenuEntry::boxed("Exit", |host: &mut Host| host.pop()),
        ]
    }
}

fn add_book(host: &mut Host) -> Result<()> {
    let Some(title) = host.input(
        "Title: ",
        convert_string,
        not_empty,
        "The title must not be empty!",
    )?
    else {
        return host.message("Cancelled.");
    };
    let Some(author) = host.input(
        "Author: ",
        convert_string,
        not_empty,
        "The author must not be empty!",
    )?
    else {
        return host.message("Cancelled.");
    };
    let Some(year) = host.input(
        "Year published: ",
        convert_int,
        always,
        "The year must be a whole number!",
    )?
    else {
        return host.message("Cancelled.");
    };

    let result = host.context_mut().api.add_book(title, author, year);
    report(host, result)?;
    Ok(())
}

/// Ask for the id of an existing book. `None` if there are no books or the
/// user cancelled.
fn prompt_existing_id(host: &mut Host, ids: &[u64]) -> Result<Option<u64>> {
    if ids.is_empty() {
        host.message("No books.")?;
        return Ok(None);
    }
    host.input(
        "Book ID: ",
        convert_id,
        |id| ids.contains(id),
        "There is no book with that ID!",
    )
}

fn find_book(host: &mut Host) -> Result<()> {
    let ids: Vec<u64> = host.context().api.storage().ids().into_iter().collect();
    if let Some(id) = prompt_existing_id(host, &ids)? {
        host.push(BookMenu::new(id));
    }
    Ok(())
}

fn list_books(host: &mut Host) -> Result<()> {
    let result = host.context().api.list_books();
    let Some(result) = report(host, result)? else {
        return Ok(());
    };
    if !result.listed_books.is_empty() {
        let ids = result.listed_books.iter().map(|b| b.id()).collect();
        let menu = BooksListMenu::new("All books", ids, host.context_mut());
        host.push(menu);
    }
    Ok(())
}

fn remove_book(host: &mut Host) -> Result<()> {
    let ids: Vec<u64> = host.context().api.storage().ids().into_iter().collect();
    if let Some(id) = prompt_existing_id(host, &ids)? {
        let result = host.context_mut().api.remove_book(id);
        report(host, result)?;
    }
    Ok(())
}
