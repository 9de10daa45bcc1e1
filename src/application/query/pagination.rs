// SPDX-License-Identifier: MPL-2.0
//! Client-side pagination over the local collection.
//!
//! The whole collection is fetched at once; pages are slices of it. The
//! current page is clamped whenever the collection shrinks (e.g., after the
//! last row of the last page is deleted).

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

/// Rows per page, clamped to the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// Creates a page size, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE))
    }

    /// Returns the value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

/// Snapshot of the pagination state for rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (0-indexed).
    pub current: usize,
    /// Number of pages; at least 1 so an empty list still shows one page.
    pub total_pages: usize,
    /// Number of items in the collection.
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Tracks the current page of a list screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    page_size: PageSize,
    current: usize,
}

impl Paginator {
    #[must_use]
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            current: 0,
        }
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the current page (0-indexed).
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the number of pages for `total` items (at least 1).
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.get()).max(1)
    }

    /// Returns the slice of `items` on the current page.
    #[must_use]
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let size = self.page_size.get();
        let start = self.current.saturating_mul(size).min(items.len());
        let end = start.saturating_add(size).min(items.len());
        items.get(start..end).unwrap_or_default()
    }

    /// Returns a rendering snapshot for `total` items.
    #[must_use]
    pub fn info(&self, total: usize) -> PageInfo {
        let total_pages = self.total_pages(total);
        PageInfo {
            current: self.current,
            total_pages,
            total_items: total,
            has_previous: self.current > 0,
            has_next: self.current + 1 < total_pages,
        }
    }

    /// Moves to the next page. Returns `false` on the last page.
    pub fn next(&mut self, total: usize) -> bool {
        if self.current + 1 < self.total_pages(total) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Moves to the previous page. Returns `false` on the first page.
    pub fn previous(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jumps to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize, total: usize) {
        self.current = page.min(self.total_pages(total) - 1);
    }

    /// Keeps the current page within bounds after the collection changed.
    pub fn clamp(&mut self, total: usize) {
        self.go_to(self.current, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paginator(size: usize) -> Paginator {
        Paginator::new(PageSize::new(size))
    }

    #[test]
    fn page_size_is_clamped() {
        assert_eq!(PageSize::new(0).get(), MIN_PAGE_SIZE);
        assert_eq!(PageSize::new(10_000).get(), MAX_PAGE_SIZE);
    }

    #[test]
    fn empty_list_has_one_empty_page() {
        let p = paginator(10);
        let items: Vec<u32> = Vec::new();
        assert_eq!(p.total_pages(0), 1);
        assert!(p.page(&items).is_empty());
        let info = p.info(0);
        assert!(!info.has_next);
        assert!(!info.has_previous);
    }

    #[test]
    fn slices_pages() {
        let items: Vec<u32> = (0..25).collect();
        let mut p = paginator(10);
        assert_eq!(p.page(&items), &items[0..10]);
        assert!(p.next(items.len()));
        assert!(p.next(items.len()));
        assert_eq!(p.page(&items), &items[20..25]);
        assert!(!p.next(items.len()));
        assert!(p.previous());
        assert_eq!(p.current(), 1);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut p = paginator(10);
        p.go_to(2, 25);
        assert_eq!(p.current(), 2);
        p.clamp(20);
        assert_eq!(p.current(), 1);
        p.clamp(0);
        assert_eq!(p.current(), 0);
    }

    #[test]
    fn go_to_past_end_lands_on_last_page() {
        let mut p = paginator(5);
        p.go_to(99, 12);
        assert_eq!(p.current(), 2);
        assert!(p.info(12).has_previous);
    }
}
