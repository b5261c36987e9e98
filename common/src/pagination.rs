//! Page navigation state machine and the page-index strip layout.
//!
//! The navigator is the single source of truth for "which page is shown".
//! Every operation re-establishes the invariant
//! `1 <= current_page <= max(num_pages, 1)`, so callers never have to
//! pre-validate page numbers.

use serde::{Deserialize, Serialize};

use crate::viewer_const::MAX_INLINE_PAGE_BUTTONS;

/// Tracks the current page of a paginated document.
///
/// `num_pages == 0` means no document has finished loading yet; navigation
/// is then pinned to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageNavigator {
    current_page: u32,
    num_pages: u32,
}

impl PageNavigator {
    pub fn new() -> Self {
        Self {
            current_page: 1,
            num_pages: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    fn last_page(&self) -> u32 {
        self.num_pages.max(1)
    }

    /// Step back one page, stopping at page 1.
    pub fn go_to_prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Step forward one page, stopping at the last page.
    pub fn go_to_next(&mut self) {
        self.current_page = (self.current_page + 1).min(self.last_page());
    }

    /// Jump to an absolute page number, clamped into the valid range.
    pub fn go_to_page(&mut self, page: u32) {
        self.current_page = page.clamp(1, self.last_page());
    }

    /// A freshly loaded document always starts at page 1, discarding any
    /// prior position.
    pub fn document_loaded(&mut self, num_pages: u32) {
        self.num_pages = num_pages;
        self.current_page = 1;
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.num_pages
    }
}

impl Default for PageNavigator {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of the page-index strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStripEntry {
    Page(u32),
    Ellipsis,
}

/// Layout of the page-index strip: buttons for pages
/// `1..=min(num_pages, MAX_INLINE_PAGE_BUTTONS)`, and when more pages
/// exist an ellipsis followed by the final page.
pub fn page_strip(num_pages: u32) -> Vec<PageStripEntry> {
    let inline = num_pages.min(MAX_INLINE_PAGE_BUTTONS);
    let mut entries: Vec<PageStripEntry> = (1..=inline).map(PageStripEntry::Page).collect();
    if num_pages > MAX_INLINE_PAGE_BUTTONS {
        entries.push(PageStripEntry::Ellipsis);
        entries.push(PageStripEntry::Page(num_pages));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(num_pages: u32, current_page: u32) -> PageNavigator {
        let mut nav = PageNavigator::new();
        nav.document_loaded(num_pages);
        nav.go_to_page(current_page);
        nav
    }

    #[test]
    fn new_navigator_starts_at_page_one_with_unknown_length() {
        let nav = PageNavigator::new();
        assert_eq!(nav.current_page(), 1);
        assert_eq!(nav.num_pages(), 0);
        assert!(!nav.has_prev());
        assert!(!nav.has_next());
    }

    #[test]
    fn next_and_prev_are_clamped_for_all_states() {
        for num_pages in 0..=12u32 {
            for current in 1..=num_pages.max(1) {
                let mut nav = loaded(num_pages, current);
                nav.go_to_next();
                assert_eq!(nav.current_page(), (current + 1).min(num_pages.max(1)));

                let mut nav = loaded(num_pages, current);
                nav.go_to_prev();
                assert_eq!(nav.current_page(), current.saturating_sub(1).max(1));
            }
        }
    }

    #[test]
    fn navigation_before_load_stays_on_page_one() {
        // num_pages == 0: ArrowRight on a still-loading document must not
        // move off page 1.
        let mut nav = PageNavigator::new();
        nav.go_to_next();
        assert_eq!(nav.current_page(), 1);
        nav.go_to_prev();
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn document_loaded_resets_to_page_one() {
        let mut nav = loaded(20, 17);
        nav.document_loaded(5);
        assert_eq!(nav.num_pages(), 5);
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn go_to_page_clamps_out_of_range_input() {
        let mut nav = loaded(5, 1);
        nav.go_to_page(9);
        assert_eq!(nav.current_page(), 5);
        nav.go_to_page(0);
        assert_eq!(nav.current_page(), 1);
        nav.go_to_page(3);
        assert_eq!(nav.current_page(), 3);
    }

    #[test]
    fn five_page_walkthrough() {
        let mut nav = loaded(5, 3);
        nav.go_to_prev();
        assert_eq!(nav.current_page(), 2);
        nav.go_to_next();
        assert_eq!(nav.current_page(), 3);
        nav.go_to_next();
        assert_eq!(nav.current_page(), 4);
        for _ in 0..3 {
            nav.go_to_next();
            assert!(nav.current_page() <= 5);
        }
        assert_eq!(nav.current_page(), 5);
        assert!(!nav.has_next());
    }

    #[test]
    fn short_documents_get_one_button_per_page() {
        assert_eq!(page_strip(0), vec![]);
        assert_eq!(
            page_strip(3),
            vec![
                PageStripEntry::Page(1),
                PageStripEntry::Page(2),
                PageStripEntry::Page(3),
            ]
        );
        assert_eq!(page_strip(10).len(), 10);
        assert!(!page_strip(10).contains(&PageStripEntry::Ellipsis));
    }

    #[test]
    fn long_documents_collapse_into_ellipsis_and_last_page() {
        let strip = page_strip(15);
        assert_eq!(strip.len(), 12);
        assert_eq!(strip[..10].to_vec(), (1..=10).map(PageStripEntry::Page).collect::<Vec<_>>());
        assert_eq!(strip[10], PageStripEntry::Ellipsis);
        assert_eq!(strip[11], PageStripEntry::Page(15));
    }

    #[test]
    fn jumping_to_the_strip_tail_page_lands_there() {
        let mut nav = loaded(15, 1);
        let strip = page_strip(nav.num_pages());
        let PageStripEntry::Page(last) = *strip.last().expect("strip is non-empty") else {
            panic!("strip must end with a page button");
        };
        nav.go_to_page(last);
        assert_eq!(nav.current_page(), 15);
    }
}
