//! Per-table view state: filter, sort and current page.
//!
//! Rows themselves are never stored here. Each render takes the current
//! collection snapshot and recomputes filter → sort → page, so a view never
//! shows stale data after a create or delete.

use std::marker::PhantomData;

use crate::domain::{Order, Product};
use crate::view::filter::{OrderFilter, ProductFilter, RowFilter};
use crate::view::page::{paginate, Page, Pagination};
use crate::view::sort::{OrderColumn, ProductColumn, SortColumn, SortDirection, SortState};

pub type ProductTable = TableView<Product, ProductFilter, ProductColumn>;
pub type OrderTable = TableView<Order, OrderFilter, OrderColumn>;

#[derive(Debug, Clone)]
pub struct TableView<T, F, C> {
    filter: F,
    sort: SortState<C>,
    pagination: Pagination,
    _rows: PhantomData<fn(&T)>,
}

impl<T, F, C> TableView<T, F, C>
where
    T: Clone,
    F: RowFilter<T> + Default,
    C: SortColumn<T>,
{
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filter: F::default(),
            sort: SortState::new(),
            pagination: Pagination::new(page_size),
            _rows: PhantomData,
        }
    }

    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Replaces the filter and returns to the first page.
    pub fn set_filter(&mut self, filter: F) {
        self.filter = filter;
        self.pagination = self.pagination.at(0);
    }

    /// Edits the filter in place and returns to the first page.
    pub fn update_filter(&mut self, edit: impl FnOnce(&mut F)) {
        edit(&mut self.filter);
        self.pagination = self.pagination.at(0);
    }

    pub fn sort(&self) -> &SortState<C> {
        &self.sort
    }

    /// Header click. The page index is kept; rendering clamps it.
    pub fn toggle_sort(&mut self, column: C) -> Option<SortDirection> {
        self.sort.toggle(column)
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn next_page(&mut self, rows: &[T]) {
        let last = self.pagination.total_pages(self.count_matching(rows)) - 1;
        self.pagination = self.pagination.at((self.page_index() + 1).min(last));
    }

    pub fn previous_page(&mut self) {
        self.pagination = self.pagination.at(self.page_index().saturating_sub(1));
    }

    /// Jumps to `index`, clamped to the pages `rows` currently produce.
    pub fn go_to_page(&mut self, index: usize, rows: &[T]) {
        let requested = self.pagination.at(index);
        self.pagination = requested.at(requested.clamped_index(self.count_matching(rows)));
    }

    /// Every row that passes the filter, in display order.
    pub fn visible_rows(&self, rows: &[T]) -> Vec<T> {
        let mut matching: Vec<T> = rows.iter().filter(|row| self.filter.matches(row)).cloned().collect();
        self.sort.apply(&mut matching);
        matching
    }

    /// Produces the current page and pulls the stored index back into range
    /// if the collection shrank under it.
    pub fn render(&mut self, rows: &[T]) -> Page<T> {
        let page = paginate(self.visible_rows(rows), self.pagination);
        self.pagination = self.pagination.at(page.page_index);
        page
    }

    fn count_matching(&self, rows: &[T]) -> usize {
        rows.iter().filter(|row| self.filter.matches(row)).count()
    }
}
