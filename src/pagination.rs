use serde::{Deserialize, Serialize};

use crate::DEFAULT_PAGE_SIZE;

/// Neighbor-window radius of the page-range algorithm.
pub const DELTA: usize = 2;

/// One page of a list request, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_no: usize,
    pub page_size: usize,
}

impl PageRequest {
    /// Builds a request, clamping page 0 to page 1.
    pub fn new(page_no: usize, page_size: usize) -> Self {
        Self {
            page_no: page_no.max(1),
            page_size,
        }
    }

    /// First page with the given size. Every page-size change goes through
    /// this so the reset-to-page-1 invariant has a single home.
    pub fn first_page(page_size: usize) -> Self {
        Self::new(1, page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of a resource listing as the server reports it. Replaced
/// wholesale on every fetch; the client never merges pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub total_records: usize,
    /// Echo of the requested page, authoritative for display even when the
    /// caller's local state races.
    pub current_page: usize,
}

impl<T> PageResult<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
            total_records: 0,
            current_page: 1,
        }
    }

    /// True when the server reports no matching records at all, as opposed
    /// to an out-of-range page of a non-empty collection.
    pub fn is_empty(&self) -> bool {
        self.total_records == 0
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Page labels to render for a pagination control; `None` is the ellipsis
/// marker.
///
/// Always contains page 1, the last page, and every page within [`DELTA`]
/// of the current one. Walking that set in order, a gap of exactly one page
/// is filled in explicitly while any larger gap collapses to a single
/// marker. Zero or one total pages renders no control at all.
pub fn page_range(current_page: usize, total_pages: usize) -> Vec<Option<usize>> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let low = current.saturating_sub(DELTA).max(1);
    let high = (current + DELTA).min(total_pages);

    let mut wanted = vec![1];
    for page in low..=high {
        if page > 1 {
            wanted.push(page);
        }
    }
    if high < total_pages {
        wanted.push(total_pages);
    }

    let mut labels = Vec::with_capacity(wanted.len() + 2);
    let mut prev: Option<usize> = None;
    for page in wanted {
        if let Some(prev) = prev {
            match page - prev {
                1 => {}
                2 => labels.push(Some(prev + 1)),
                _ => labels.push(None),
            }
        }
        labels.push(Some(page));
        prev = Some(page);
    }

    labels
}

/// Ready-to-render shape for a list screen: the items of the current page
/// plus the page labels computed from the server-reported totals.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        Self {
            items,
            pages: page_range(current_page, total_pages),
            page: current_page,
        }
    }
}

impl<T> From<PageResult<T>> for Paginated<T> {
    fn from(result: PageResult<T>) -> Self {
        Self::new(result.items, result.current_page, result.total_pages)
    }
}
