use super::{report, AppContext, Host};
use crate::menu::{Menu, MenuEntry, MenuEntryBack, StaticMenuEntry};
use crate::model::BookStatus;

/// Details of one book, looked up by id on every render.
#[derive(Debug, Clone, Copy)]
pub struct BookMenu {
    id: u64,
}

impl BookMenu {
    pub fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Menu<AppContext> for BookMenu {
    fn text(&self, ctx: &AppContext) -> String {
        match ctx.api.find(self.id) {
            Some(book) => format!(
                "ID: {}\nTitle: {}\nAuthor: {}\nYear: {}\nStatus: {}",
                book.id(),
                book.title,
                book.author,
                book.year,
                book.status
            ),
            None => format!("Book {} is no longer in the catalog.", self.id),
        }
    }

    fn entries(&self, ctx: &AppContext) -> Vec<Box<dyn MenuEntry<AppContext>>> {
        let Some(book) = ctx.api.find(self.id) else {
            return vec![MenuEntryBack::boxed()];
        };

        let id = self.id;
        let toggle_text = match book.status {
            BookStatus::InStorage => "Mark as loaned",
            BookStatus::Loaned => "Mark as in storage",
        };
        vec![
            StaticMenuEntry::boxed(toggle_text, move |host: &mut Host| {
                let result = host.context_mut().api.toggle_status(id);
                report(host, result)?;
                Ok(())
            }),
            StaticMenuEntry::boxed("Delete book", move |host: &mut Host| {
                let result = host.context_mut().api.remove_book(id);
                if report(host, result)?.is_some() {
                    host.pop()?;
                }
                Ok(())
            }),
            MenuEntryBack::boxed(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::console::ScriptedConsole;
    use crate::screens::testing::session;
    use crate::store::fixtures::StorageFixture;
    use crate::store::BookStorage;

    #[test]
    fn shows_details_and_toggles_both_ways() {
        let storage = StorageFixture::new().with_book("Dune", "Frank Herbert", 1965).storage;
        let mut s = session(storage, ScriptedConsole::new(["1", "1", "3"]));
        s.host.run(Some(Box::new(BookMenu::new(0)))).unwrap();

        let transcript = s.console.transcript();
        assert!(transcript.contains("Author: Frank Herbert"));
        assert!(transcript.contains("Status: In storage"));
        assert!(transcript.contains("Status: Loaned"));
        assert_eq!(s.console.count_output("1. Mark as loaned"), 2);
        assert_eq!(s.console.count_output("1. Mark as in storage"), 1);
        assert_eq!(
            s.host.context().api.storage().find_by_id(0).unwrap().status,
            BookStatus::InStorage
        );
    }

    #[test]
    fn delete_removes_and_closes_the_screen() {
        let storage = StorageFixture::new().with_books(2).storage;
        let mut s = session(storage, ScriptedConsole::new(["2"]));
        s.host.run(Some(Box::new(BookMenu::new(1)))).unwrap();

        assert_eq!(s.host.depth(), 0);
        assert!(!s.host.context().api.storage().exists(1));
        assert_eq!(BookStorage::load(&s.path).unwrap().count(), 1);
    }

    #[test]
    fn missing_book_only_offers_back() {
        let mut s = session(BookStorage::new(), ScriptedConsole::new(["2", "1"]));
        s.host.run(Some(Box::new(BookMenu::new(5)))).unwrap();

        assert_eq!(s.console.count_output("Book 5 is no longer in the catalog."), 2);
        assert_eq!(s.console.count_output("not a valid option"), 1);
    }
}
