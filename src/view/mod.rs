//! Derived state for the list, metrics and detail views.
//!
//! Everything here is a pure function of a collection snapshot plus the
//! view's own filter, sort and page settings.

pub mod detail;
pub mod filter;
pub mod metrics;
pub mod page;
pub mod sort;
pub mod table;

pub use detail::{OrderDetail, ResolvedLine};
pub use filter::{OrderFilter, PriceRange, ProductFilter, RowFilter};
pub use metrics::{OrderMetrics, ProductMetrics, SatisfactionLabel};
pub use page::{paginate, Page, Pagination};
pub use sort::{OrderColumn, ProductColumn, SortColumn, SortDirection, SortState};
pub use table::{OrderTable, ProductTable, TableView};
