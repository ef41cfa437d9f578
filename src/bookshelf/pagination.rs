use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page arithmetic over a list whose length may change between calls.
///
/// The stored page is a request; the effective page is always clamped to the
/// last existing page for the length passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// `page_size` is raised to 1 if zero.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 0,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Zero-based page actually shown for a list of `len` items.
    pub fn current_page(&self, len: usize) -> usize {
        self.current.min(self.page_count(len).saturating_sub(1))
    }

    pub fn has_next(&self, len: usize) -> bool {
        (self.current_page(len) + 1) * self.page_size < len
    }

    pub fn has_previous(&self, len: usize) -> bool {
        self.current_page(len) > 0
    }

    pub fn next(&mut self, len: usize) {
        if self.has_next(len) {
            self.current = self.current_page(len) + 1;
        }
    }

    pub fn previous(&mut self, len: usize) {
        self.current = self.current_page(len).saturating_sub(1);
    }

    /// Indices of the items on the current page.
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = self.current_page(len) * self.page_size;
        start.min(len)..(start + self.page_size).min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_make_three_pages() {
        let mut pager = Pager::new(10);
        assert_eq!(pager.page_count(25), 3);
        assert!(!pager.has_previous(25));
        assert!(pager.has_next(25));

        pager.next(25);
        pager.next(25);
        assert_eq!(pager.current_page(25), 2);
        assert!(!pager.has_next(25));
        assert!(pager.has_previous(25));
        assert_eq!(pager.page_range(25), 20..25);

        pager.next(25);
        assert_eq!(pager.current_page(25), 2);
    }

    #[test]
    fn growing_the_page_size_clamps_the_current_page() {
        let mut pager = Pager::new(10);
        pager.next(25);
        pager.next(25);

        pager.set_page_size(20);
        assert_eq!(pager.page_count(25), 2);
        assert_eq!(pager.current_page(25), 1);
        assert_eq!(pager.page_range(25), 20..25);

        pager.set_page_size(30);
        assert_eq!(pager.current_page(25), 0);
        assert_eq!(pager.page_range(25), 0..25);
    }

    #[test]
    fn shrinking_the_list_clamps_the_current_page() {
        let mut pager = Pager::new(5);
        pager.next(12);
        pager.next(12);
        assert_eq!(pager.current_page(12), 2);
        assert_eq!(pager.current_page(6), 1);
        assert_eq!(pager.page_range(6), 5..6);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut pager = Pager::default();
        assert_eq!(pager.page_count(0), 0);
        assert_eq!(pager.current_page(0), 0);
        assert!(!pager.has_next(0));
        assert!(!pager.has_previous(0));
        assert_eq!(pager.page_range(0), 0..0);
        pager.previous(0);
        assert_eq!(pager.current_page(0), 0);
    }

    #[test]
    fn zero_page_size_is_raised_to_one() {
        let mut pager = Pager::new(0);
        assert_eq!(pager.page_size(), 1);
        pager.set_page_size(0);
        assert_eq!(pager.page_count(3), 3);
    }
}
