use super::{report, AppContext, BooksListMenu, Host};
use crate::error::Result;
use crate::input::{always, convert_int, convert_string, not_empty};
use crate::menu::{Menu, MenuEntry, MenuEntryBack, StaticMenuEntry};
use crate::search::{Pattern, SearchCondition};
use std::cell::RefCell;
use std::rc::Rc;

/// Filters being edited. Text filters are substring terms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Filters {
    author: Option<String>,
    title: Option<String>,
    year: Option<i64>,
}

impl Filters {
    fn condition(&self) -> Result<SearchCondition> {
        let mut condition = SearchCondition::new();
        if let Some(author) = &self.author {
            condition = condition.by_author(Pattern::containing(author)?);
        }
        if let Some(title) = &self.title {
            condition = condition.by_title(Pattern::containing(title)?);
        }
        if let Some(year) = self.year {
            condition = condition.by_year(year);
        }
        Ok(condition)
    }
}

/// Edits search filters and opens the matches as a list.
#[derive(Default)]
pub struct SearchMenu {
    filters: Rc<RefCell<Filters>>,
}

impl SearchMenu {
    pub fn new() -> Self {
        Self::default()
    }

    fn set_text(
        &self,
        label: &'static str,
        field: fn(&mut Filters) -> &mut Option<String>,
    ) -> Box<dyn MenuEntry<AppContext>> {
        let filters = self.filters.clone();
        StaticMenuEntry::boxed(
            format!("Set {} filter", label),
            move |host: &mut Host| {
                let term = host.input(
                    &format!("{} contains: ", capitalize(label)),
                    convert_string,
                    not_empty,
                    "The search term must not be empty!",
                )?;
                // cancelling keeps the previous term
                if let Some(term) = term {
                    *field(&mut *filters.borrow_mut()) = Some(term);
                }
                Ok(())
            },
        )
    }

    /// Drops one filter. Listed only while that filter is set.
    fn clear(
        &self,
        label: &'static str,
        reset: fn(&mut Filters),
    ) -> Box<dyn MenuEntry<AppContext>> {
        let filters = self.filters.clone();
        StaticMenuEntry::boxed(format!("Clear {} filter", label), move |_: &mut Host| {
            reset(&mut *filters.borrow_mut());
            Ok(())
        })
    }
}

impl Menu<AppContext> for SearchMenu {
    fn text(&self, _ctx: &AppContext) -> String {
        let filters = self.filters.borrow();
        let show = |value: Option<String>| value.unwrap_or_else(|| "(any)".to_string());
        format!(
            "Search books\nAuthor contains: {}\nTitle contains: {}\nYear: {}",
            show(filters.author.clone()),
            show(filters.title.clone()),
            show(filters.year.map(|y| y.to_string())),
        )
    }

    fn entries(&self, _ctx: &AppContext) -> Vec<Box<dyn MenuEntry<AppContext>>> {
        let set = self.filters.borrow().clone();
        let year_filters = self.filters.clone();
        let run_filters = self.filters.clone();

        let mut entries = vec![self.set_text("author", |f| &mut f.author)];
        if set.author.is_some() {
            entries.push(self.clear("author", |f| f.author = None));
        }
        entries.push(self.set_text("title", |f| &mut f.title));
        if set.title.is_some() {
            entries.push(self.clear("title", |f| f.title = None));
        }
        entries.push(StaticMenuEntry::boxed(
            "Set year filter",
            move |host: &mut Host| {
                let year = host.input(
                    "Year: ",
                    convert_int,
                    always,
                    "The year must be a whole number!",
                )?;
                if let Some(year) = year {
                    year_filters.borrow_mut().year = Some(year);
                }
                Ok(())
            },
        ));
        if set.year.is_some() {
            entries.push(self.clear("year", |f| f.year = None));
        }
        entries.push(StaticMenuEntry::boxed(
            "Run search",
            move |host: &mut Host| {
                let condition = run_filters.borrow().condition()?;
                let result = host.context().api.search_books(&condition);
                let Some(result) = report(host, result)? else {
                    return Ok(());
                };
                if !result.listed_books.is_empty() {
                    let ids = result.listed_books.iter().map(|b| b.id()).collect();
                    let menu = BooksListMenu::new("Search results", ids, host.context_mut());
                    host.push(menu);
                }
                Ok(())
            },
        ));
        entries.push(MenuEntryBack::boxed());
        entries
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
