//! Client-side sorting and pagination shared by every management table.
//!
//! The page component supplies the (filtered) collection on every change;
//! [`TableViewModel`] turns it into the rows to render plus pagination
//! metadata, and keeps its sort/page state consistent through clamping.

mod pagination;
mod sort;
mod view_model;

pub use pagination::{clamp_page, paginate, total_pages, Page, PaginationOptions, PaginationState};
pub use sort::{
    compare, compare_values, parse_date, sort_items, SortConfig, SortDirection, SortValue, Sortable,
};
pub use view_model::{TableView, TableViewModel};
