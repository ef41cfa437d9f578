//! Paged table of books.
//!
//! The screen holds ids, not books, and resolves them through the catalog on
//! every render. It also listens for removals so that deleted books drop out
//! of the list even when they are deleted from another screen. The listener
//! is held weakly by the storage and goes away with the screen.

use super::{AppContext, BookMenu, Host};
use crate::events::Listener;
use crate::input::convert_id;
use crate::menu::{Menu, MenuEntry, MenuEntryBack, StaticMenuEntry};
use crate::model::Book;
use crate::pagination::Pager;
use std::cell::RefCell;
use std::rc::Rc;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 24;
const YEAR_WIDTH: usize = 6;

#[derive(Debug)]
struct ListState {
    ids: Vec<u64>,
    pager: Pager,
}

pub struct BooksListMenu {
    title: String,
    state: Rc<RefCell<ListState>>,
    _on_removed: Rc<Listener<Book>>,
}

impl BooksListMenu {
    /// List `ids` in the given order, subscribing to removals in `ctx`'s storage.
    pub fn new(title: impl Into<String>, ids: Vec<u64>, ctx: &mut AppContext) -> Self {
        let state = Rc::new(RefCell::new(ListState {
            ids,
            pager: Pager::new(ctx.page_size),
        }));

        let weak = Rc::downgrade(&state);
        let on_removed: Rc<Listener<Book>> = Rc::new(move |book: &Book| {
            if let Some(state) = weak.upgrade() {
                state.borrow_mut().ids.retain(|id| *id != book.id());
            }
        });
        ctx.api.storage_mut().on_removed().subscribe_weak(&on_removed);

        Self {
            title: title.into(),
            state,
            _on_removed: on_removed,
        }
    }

    pub fn ids(&self) -> Vec<u64> {
        self.state.borrow().ids.clone()
    }
}

impl Menu<AppContext> for BooksListMenu {
    fn text(&self, ctx: &AppContext) -> String {
        let state = self.state.borrow();
        let len = state.ids.len();
        if len == 0 {
            return format!("{}\nNo books.", self.title);
        }

        let mut lines = vec![self.title.clone(), header()];
        for id in &state.ids[state.pager.page_range(len)] {
            if let Some(book) = ctx.api.find(*id) {
                lines.push(row(book));
            }
        }
        lines.push(format!(
            "Page {}/{} ({} book(s))",
            state.pager.current_page(len) + 1,
            state.pager.page_count(len),
            len
        ));
        lines.join("\n")
    }

    fn entries(&self, _ctx: &AppContext) -> Vec<Box<dyn MenuEntry<AppContext>>> {
        let state = self.state.borrow();
        let len = state.ids.len();
        let mut entries = Vec::new();

        if state.pager.has_next(len) {
            let state = self.state.clone();
            entries.push(StaticMenuEntry::boxed("Next page", move |_: &mut Host| {
                let mut state = state.borrow_mut();
                let len = state.ids.len();
                state.pager.next(len);
                Ok(())
            }));
        }
        if state.pager.has_previous(len) {
            let state = self.state.clone();
            entries.push(StaticMenuEntry::boxed("Previous page", move |_: &mut Host| {
                let mut state = state.borrow_mut();
                let len = state.ids.len();
                state.pager.previous(len);
                Ok(())
            }));
        }
        if len > 0 {
            let state = self.state.clone();
            entries.push(StaticMenuEntry::boxed("Open a book", move |host: &mut Host| {
                let ids = state.borrow().ids.clone();
                if let Some(id) = host.input(
                    "Book ID: ",
                    convert_id,
                    |id| ids.contains(id),
                    "That book is not in this list!",
                )? {
                    host.push(BookMenu::new(id));
                }
                Ok(())
            }));

            let state = self.state.clone();
            entries.push(StaticMenuEntry::boxed(
                "Change page size",
                move |host: &mut Host| {
                    let size = host.input(
                        "Books per page: ",
                        |raw: &str| raw.trim().parse::<usize>(),
                        |size| *size >= 1,
                        "The page size must be a whole number of at least 1!",
                    )?;
                    if let Some(size) = size {
                        state.borrow_mut().pager.set_page_size(size);
                    }
                    Ok(())
                },
            ));
        }
        entries.push(MenuEntryBack::boxed());
        entries
    }
}

fn header() -> String {
    format!(
        "{} {} {} {} Status",
        pad_left("ID", ID_WIDTH),
        pad_right("Title", TITLE_WIDTH),
        pad_right("Author", AUTHOR_WIDTH),
        pad_left("Year", YEAR_WIDTH),
    )
}

fn row(book: &Book) -> String {
    format!(
        "{} {} {} {} {}",
        pad_left(&book.id().to_string(), ID_WIDTH),
        pad_right(&book.title, TITLE_WIDTH),
        pad_right(&book.author, AUTHOR_WIDTH),
        pad_left(&book.year.to_string(), YEAR_WIDTH),
        book.status
    )
}

fn pad_right(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width);
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width);
    let fill = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(fill), s)
}

/// Cuts `s` to at most `max_width` display columns, ending with an ellipsis if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::console::ScriptedConsole;
    use crate::screens::testing::session;
    use crate::store::fixtures::StorageFixture;

    fn open(s: &mut crate::screens::testing::Session, ids: Vec<u64>) {
        s.host.context_mut().page_size = 10;
        let menu = BooksListMenu::new("All books", ids, s.host.context_mut());
        s.host.push(menu);
    }

    #[test]
    fn pages_through_twenty_five_books() {
        let storage = StorageFixture::new().with_books(25).storage;
        // next, next, previous, then back from the middle page
        let console = ScriptedConsole::new(["1", "1", "1", "5"]);
        let mut s = session(storage, console);
        open(&mut s, (0..25).collect());
        s.host.run(None).unwrap();

        let out = s.console.transcript();
        assert!(out.contains("Page 1/3 (25 book(s))"));
        assert!(out.contains("Page 2/3"));
        assert!(out.contains("Page 3/3"));
        assert!(out.contains("Book 25"));
        assert_eq!(s.console.count_output("Previous page"), 3);
    }

    #[test]
    fn empty_list_only_offers_back() {
        let mut s = session(StorageFixture::new().storage, ScriptedConsole::new(["1"]));
        open(&mut s, Vec::new());
        s.host.run(None).unwrap();

        assert!(s.console.transcript().contains("No books."));
        assert_eq!(s.console.count_output("1. Back"), 1);
    }

    #[test]
    fn changing_page_size_repaginates() {
        let storage = StorageFixture::new().with_books(5).storage;
        // set the size to 2 after two bad tries, then back from page 1 of 3
        let console = ScriptedConsole::new(["2", "0", "x", "2", "4"]);
        let mut s = session(storage, console);
        open(&mut s, (0..5).collect());
        s.host.run(None).unwrap();

        assert!(s.console.transcript().contains("Page 1/3 (5 book(s))"));
        assert_eq!(
            s.console
                .count_output("The page size must be a whole number of at least 1!"),
            2
        );
    }

    #[test]
    fn deleting_from_the_detail_screen_prunes_the_list() {
        let storage = StorageFixture::new().with_books(3).storage;
        // open book 1, delete it, back
        let console = ScriptedConsole::new(["1", "1", "2", "3"]);
        let mut s = session(storage, console);
        open(&mut s, vec![0, 1, 2]);
        s.host.run(None).unwrap();

        assert!(s.console.transcript().contains("Page 1/1 (2 book(s))"));
    }

    #[test]
    fn listener_dies_with_the_screen() {
        let storage = StorageFixture::new().with_books(2).storage;
        let mut s = session(storage, ScriptedConsole::default());
        let menu = BooksListMenu::new("All books", vec![0, 1], s.host.context_mut());

        s.host.context_mut().api.remove_book(0).unwrap();
        assert_eq!(menu.ids(), [1]);

        drop(menu);
        s.host.context_mut().api.remove_book(1).unwrap();
        assert!(s.host.context_mut().api.storage_mut().on_removed().is_empty());
    }

    #[test]
    fn rows_are_truncated_by_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語の本", 6), "日本…");
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("7", 3), "  7");
    }
}
