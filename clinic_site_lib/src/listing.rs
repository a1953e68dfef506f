//! Client-side windowing of an already-fetched collection.
//!
//! A [`Listing`] owns the full item list and a current page. Changing page
//! never touches the network; it only moves the window over the items that
//! are already in memory.

use std::fmt;

use serde::Serialize;

/// Up to this many pages, every page number is shown without compaction.
pub const MAX_UNCOMPACTED_PAGES: usize = 7;

/// One entry in the row of page controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLink::Page(n) => write!(f, "{}", n),
            PageLink::Ellipsis => write!(f, "..."),
        }
    }
}

/// `ceil(total_items / page_size)`; zero when there is nothing to show.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Page numbers to render for `current` out of `total`.
///
/// With seven pages or fewer every page is listed. Beyond that the first and
/// last pages are always shown, along with the current page and its immediate
/// neighbours; an ellipsis stands in for each skipped run.
pub fn visible_pages(current: usize, total: usize) -> Vec<PageLink> {
    if total <= MAX_UNCOMPACTED_PAGES {
        return (1..=total).map(PageLink::Page).collect();
    }
    let current = current.clamp(1, total);

    let mut pages = vec![PageLink::Page(1)];
    if current > 3 {
        pages.push(PageLink::Ellipsis);
    }

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    pages.extend((start..=end).map(PageLink::Page));

    if current + 2 < total {
        pages.push(PageLink::Ellipsis);
    }
    pages.push(PageLink::Page(total));
    pages
}

/// The items on 1-indexed `page`, clamped to what is available.
pub fn items_for_page<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Page-number row plus previous/next availability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub current: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// "Showing `first` - `last` of `total`", 1-indexed and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub first: usize,
    pub last: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} - {} of {}", self.first, self.last, self.total)
    }
}

/// What the listing region should display.
#[derive(Debug, PartialEq)]
pub enum ListingView<'a, T> {
    /// The collection itself is empty.
    Empty,
    Page {
        items: &'a [T],
        /// `None` when everything fits on one page.
        controls: Option<PageControls>,
        summary: PageSummary,
    },
}

/// A fully fetched collection with a movable page window.
#[derive(Clone, Debug)]
pub struct Listing<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Listing<T> {
    /// Starts on page 1. A zero `page_size` is treated as 1.
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Self {
            items,
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the collection and returns to page 1.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    /// Moves to `requested`. Out-of-range pages are ignored and return `false`.
    pub fn go_to_page(&mut self, requested: usize) -> bool {
        if requested < 1 || requested > self.total_pages() {
            return false;
        }
        self.current_page = requested;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn current_items(&self) -> &[T] {
        items_for_page(&self.items, self.current_page, self.page_size)
    }

    /// Controls for the current page, or `None` when there is at most one page.
    pub fn controls(&self) -> Option<PageControls> {
        let total = self.total_pages();
        if total <= 1 {
            return None;
        }
        Some(PageControls {
            current: self.current_page,
            total_pages: total,
            links: visible_pages(self.current_page, total),
            previous_enabled: self.current_page > 1,
            next_enabled: self.current_page < total,
        })
    }

    pub fn summary(&self) -> Option<PageSummary> {
        if self.items.is_empty() {
            return None;
        }
        let start = (self.current_page - 1) * self.page_size;
        Some(PageSummary {
            first: start + 1,
            last: (start + self.page_size).min(self.items.len()),
            total: self.items.len(),
        })
    }

    pub fn view(&self) -> ListingView<'_, T> {
        match self.summary() {
            None => ListingView::Empty,
            Some(summary) => ListingView::Page {
                items: self.current_items(),
                controls: self.controls(),
                summary,
            },
        }
    }
}
