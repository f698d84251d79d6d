//! Table state machine: sort config and pagination combined into one projection.

use super::pagination::{clamp_page, paginate, total_pages, Page, PaginationOptions, PaginationState};
use super::sort::{sort_items, SortConfig, SortDirection, Sortable};

/// Everything a table renders for one pass over a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<T> {
    pub sorted: Vec<T>,
    pub page: Page<T>,
    pub sort: SortConfig,
}

/// Sort and pagination state of one table for the lifetime of its page view.
///
/// The model never owns the collection: pass the current (already filtered)
/// rows to [`TableViewModel::view`] on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    sort: SortConfig,
    pagination: PaginationState,
    options: PaginationOptions,
    total_rows: usize,
}

impl Default for TableViewModel {
    fn default() -> Self {
        Self::new(PaginationOptions::default())
    }
}

impl TableViewModel {
    pub fn new(options: PaginationOptions) -> Self {
        let options = options.normalized();
        Self {
            sort: SortConfig::default(),
            pagination: PaginationState {
                current_page: 1,
                rows_per_page: options.initial_rows_per_page,
            },
            options,
            total_rows: 0,
        }
    }

    pub fn with_sort(mut self, key: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = SortConfig::new(key, direction);
        self
    }

    pub fn sort_config(&self) -> &SortConfig {
        &self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn options(&self) -> PaginationOptions {
        self.options
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_rows, self.pagination.rows_per_page)
    }

    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.sort.direction_for(key)
    }

    pub fn sort_by(&mut self, key: Option<&str>) {
        self.sort.sort_by(key);
    }

    /// Clamped against the row count seen by the last commit.
    pub fn set_page(&mut self, page: i64) -> usize {
        self.pagination.current_page = clamp_page(page, self.total_pages());
        self.pagination.current_page
    }

    /// Clamps into the configured bounds and goes back to page 1.
    pub fn set_rows_per_page(&mut self, rows_per_page: i64) -> PaginationState {
        self.pagination = PaginationState {
            current_page: 1,
            rows_per_page: self.options.clamp_rows_per_page(rows_per_page),
        };
        self.pagination
    }

    /// Pure projection: sorts a copy of `items` and slices the current page.
    /// A shrunken collection yields a corrected page in the result; call
    /// [`TableViewModel::commit`] to adopt it.
    pub fn project<T: Sortable + Clone>(&self, items: &[T]) -> TableView<T> {
        let sorted = sort_items(items, &self.sort);
        let page = paginate(&sorted, &self.pagination);
        TableView {
            sorted,
            page,
            sort: self.sort.clone(),
        }
    }

    /// Records the row count and corrected page of a projection.
    /// Returns true when the stored page changed.
    pub fn commit<T>(&mut self, view: &TableView<T>) -> bool {
        self.commit_page(view.page.current_page, view.page.total_rows)
    }

    pub fn commit_page(&mut self, current_page: usize, total_rows: usize) -> bool {
        self.total_rows = total_rows;
        let corrected = clamp_page(current_page as i64, self.total_pages());
        let changed = corrected != self.pagination.current_page;
        self.pagination.current_page = corrected;
        changed
    }

    pub fn view<T: Sortable + Clone>(&mut self, items: &[T]) -> TableView<T> {
        let view = self.project(items);
        self.commit(&view);
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::table::SortValue;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        name: String,
        seq: i64,
    }

    impl Sortable for Item {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "name" => (&self.name).into(),
                "seq" => self.seq.into(),
                _ => SortValue::Missing,
            }
        }
    }

    fn items(n: i64) -> Vec<Item> {
        (1..=n)
            .map(|seq| Item {
                name: format!("item-{seq}"),
                seq,
            })
            .collect()
    }

    fn names(rows: &[Item]) -> Vec<String> {
        rows.iter().map(|i| i.name.clone()).collect()
    }

    fn options(initial: usize) -> PaginationOptions {
        PaginationOptions {
            initial_rows_per_page: initial,
            min_rows_per_page: 5,
            max_rows_per_page: 100,
        }
    }

    #[test]
    fn test_twenty_five_items_ten_per_page() {
        let data = items(25);
        let mut model = TableViewModel::new(options(10));
        let view = model.view(&data);
        assert_eq!(names(&view.page.rows), names(&data[..10]));
        assert_eq!(view.page.total_pages, 3);
        assert_eq!(view.page.total_rows, 25);

        model.set_rows_per_page(25);
        let view = model.view(&data);
        assert_eq!(view.page.rows.len(), 25);
        assert_eq!(view.page.total_pages, 1);
        assert_eq!(view.page.current_page, 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let data = items(25);
        let mut model = TableViewModel::new(options(10));
        model.view(&data);
        assert_eq!(model.set_page(-5), 1);
        assert_eq!(model.set_page(1_000_000), 3);
        assert_eq!(model.pagination().current_page, 3);
        assert_eq!(model.set_page(0), 1);
    }

    #[test]
    fn test_rows_per_page_change_resets_page_and_clamps() {
        let data = items(45);
        let mut model = TableViewModel::new(options(10));
        model.view(&data);
        model.set_page(4);
        let state = model.set_rows_per_page(1_000);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.rows_per_page, 100);
        let state = model.set_rows_per_page(-1);
        assert_eq!(state.rows_per_page, 5);
    }

    #[test]
    fn test_shrink_corrects_current_page() {
        let mut model = TableViewModel::new(options(10));
        model.view(&items(45));
        assert_eq!(model.set_page(5), 5);

        let shrunk = items(12);
        let projected = model.project(&shrunk);
        assert!(projected.page.page_corrected);
        assert_eq!(projected.page.current_page, 2);
        assert_eq!(model.pagination().current_page, 5);

        assert!(model.commit(&projected));
        assert_eq!(model.pagination().current_page, 2);
        assert_eq!(model.total_pages(), 2);
        assert_eq!(names(&projected.page.rows), vec!["item-11", "item-12"]);
    }

    #[test]
    fn test_sort_applies_before_paging() {
        let data = items(12);
        let mut model = TableViewModel::new(options(5)).with_sort("seq", SortDirection::Desc);
        let view = model.view(&data);
        assert_eq!(
            names(&view.page.rows),
            vec!["item-12", "item-11", "item-10", "item-9", "item-8"]
        );
        assert_eq!(view.sorted.len(), 12);
        assert_eq!(model.direction_for("seq"), Some(SortDirection::Desc));

        model.sort_by(Some("seq"));
        let view = model.view(&data);
        assert_eq!(view.page.rows[0].name, "item-1");
    }

    #[test]
    fn test_sort_keeps_page() {
        let data = items(30);
        let mut model = TableViewModel::new(options(10));
        model.view(&data);
        model.set_page(2);
        model.sort_by(Some("name"));
        let view = model.view(&data);
        assert_eq!(view.page.current_page, 2);
    }

    #[test]
    fn test_empty_collection() {
        let mut model = TableViewModel::new(options(10));
        let view = model.view::<Item>(&[]);
        assert!(view.page.rows.is_empty());
        assert_eq!(view.page.current_page, 1);
        assert_eq!(view.page.total_pages, 1);
        assert_eq!(model.set_page(7), 1);
    }

    #[test]
    fn test_initial_rows_per_page_is_clamped() {
        let model = TableViewModel::new(options(1_000));
        assert_eq!(model.pagination().rows_per_page, 100);
    }
}
