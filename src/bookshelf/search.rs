//! # Search Conditions
//!
//! A [`SearchCondition`] is a conjunction of optional criteria evaluated
//! against a single [`Book`]. Unset criteria do not constrain anything, so an
//! empty condition matches every book.
//!
//! Text criteria are [`Pattern`]s and must match the **whole** field.
//! Substring search is expressed by the caller with [`Pattern::containing`],
//! which wraps the escaped term in "anything" on both sides.

use crate::error::Result;
use crate::model::Book;
use regex::Regex;

/// A regular expression anchored to match an entire field.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// Matches any text that contains `term` literally.
    pub fn containing(term: &str) -> Result<Self> {
        Self::new(&format!("(?s).*{}.*", regex::escape(term)))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchCondition {
    author: Option<Pattern>,
    title: Option<Pattern>,
    year: Option<i64>,
}

impl SearchCondition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_author(mut self, pattern: Pattern) -> Self {
        self.author = Some(pattern);
        self
    }

    pub fn by_title(mut self, pattern: Pattern) -> Self {
        self.title = Some(pattern);
        self
    }

    pub fn by_year(mut self, year: i64) -> Self {
        self.year = Some(year);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_none() && self.title.is_none() && self.year.is_none()
    }

    pub fn matches(&self, book: &Book) -> bool {
        self.author.as_ref().is_none_or(|p| p.is_match(&book.author))
            && self.title.as_ref().is_none_or(|p| p.is_match(&book.title))
            && self.year.is_none_or(|year| year == book.year)
    }
}
