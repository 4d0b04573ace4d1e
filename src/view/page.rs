//! Fixed-size pagination over an already filtered and sorted row set.

use serde::Serialize;

/// Requested page. The index is clamped when a page is produced.
///
/// Fields stay private so the page size can only come through [`Pagination::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Pagination {
    /// `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn at(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Always at least one.
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn total_pages(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size()).max(1)
    }

    /// Nearest valid index for a result of `total_count` rows.
    pub fn clamped_index(&self, total_count: usize) -> usize {
        self.page_index.min(self.total_pages(total_count) - 1)
    }
}

/// The visible slice plus everything the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
    pub page_index: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// 1-based inclusive "showing a to b" bounds; `None` when nothing matched.
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let start = self.page_index * self.page_size + 1;
        Some((start, start + self.items.len() - 1))
    }

    pub fn has_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pager caption, e.g. "Showing 11 to 15 of 15".
    pub fn summary(&self) -> String {
        match self.range() {
            Some((start, end)) => format!("Showing {} to {} of {}", start, end, self.total_count),
            None => "No results".to_string(),
        }
    }
}

/// Cuts the requested page out of `rows`.
pub fn paginate<T>(rows: Vec<T>, pagination: Pagination) -> Page<T> {
    let total_count = rows.len();
    let total_pages = pagination.total_pages(total_count);
    let page_index = pagination.clamped_index(total_count);

    let page_size = pagination.page_size();

    let items = rows.into_iter().skip(page_index * page_size).take(page_size).collect();

    Page {
        items,
        total_count,
        total_pages,
        page_index,
        page_size,
    }
}
