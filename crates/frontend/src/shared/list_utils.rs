//! Table state for list pages: the reactive wrapper over
//! [`TableViewModel`], search input and sort indicators.

use contracts::shared::table::{
    PaginationOptions, SortConfig, SortDirection, Sortable, TableView, TableViewModel,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Reactive handle returned by [`use_table_view`].
///
/// The projection is recomputed whenever the source rows or the model change;
/// a page correction caused by a shrinking collection is written back to the
/// model so pagination controls show the corrected page.
pub struct TableViewHandle<T: Send + Sync + 'static> {
    model: RwSignal<TableViewModel>,
    view: Memo<TableView<T>>,
}

impl<T: Send + Sync + 'static> Clone for TableViewHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableViewHandle<T> {}

pub fn use_table_view<T>(items: Signal<Vec<T>>, options: PaginationOptions) -> TableViewHandle<T>
where
    T: Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    use_table_view_from(items, TableViewModel::new(options))
}

/// Same as [`use_table_view`] starting from a prepared model, e.g. one with
/// an initial sort.
pub fn use_table_view_from<T>(items: Signal<Vec<T>>, initial: TableViewModel) -> TableViewHandle<T>
where
    T: Sortable + Clone + PartialEq + Send + Sync + 'static,
{
    let model = RwSignal::new(initial);
    let view = Memo::new(move |_| items.with(|rows| model.with(|m| m.project(rows))));

    Effect::new(move |_| {
        let (page, total_rows) = view.with(|v| (v.page.current_page, v.page.total_rows));
        let stale = model.with_untracked(|m| {
            m.pagination().current_page != page || m.total_rows() != total_rows
        });
        if stale {
            model.update(|m| {
                let before = m.pagination().current_page;
                if m.commit_page(page, total_rows) {
                    log::debug!("table page clamped from {} to {} ({} rows)", before, page, total_rows);
                }
            });
        }
    });

    TableViewHandle { model, view }
}

impl<T: Clone + Send + Sync + 'static> TableViewHandle<T> {
    pub fn paginated_data(&self) -> Signal<Vec<T>> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.rows.clone()))
    }

    pub fn sorted_data(&self) -> Signal<Vec<T>> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.sorted.clone()))
    }

    pub fn current_page(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.current_page))
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.total_pages))
    }

    pub fn rows_per_page(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.rows_per_page))
    }

    pub fn total_rows(&self) -> Signal<usize> {
        let view = self.view;
        Signal::derive(move || view.with(|v| v.page.total_rows))
    }

    /// `(first, last)` 1-based row numbers shown on the current page.
    pub fn row_range(&self) -> Signal<(usize, usize)> {
        let view = self.view;
        Signal::derive(move || view.with(|v| (v.page.first_row_number(), v.page.last_row_number())))
    }

    pub fn sort_config(&self) -> Signal<SortConfig> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.sort_config().clone()))
    }

    pub fn get_sort_direction(&self, key: &'static str) -> Signal<Option<SortDirection>> {
        let model = self.model;
        Signal::derive(move || model.with(|m| m.direction_for(key)))
    }

    pub fn handle_page_change(&self, page: usize) {
        self.model.update(|m| {
            m.set_page(page as i64);
        });
    }

    pub fn handle_rows_per_page_change(&self, rows_per_page: usize) {
        self.model.update(|m| {
            m.set_rows_per_page(rows_per_page as i64);
        });
    }

    pub fn handle_sort(&self, key: &str) {
        self.model.update(|m| m.sort_by(Some(key)));
    }

    pub fn clear_sort(&self) {
        self.model.update(|m| m.sort_by(None));
    }

    pub fn options(&self) -> PaginationOptions {
        self.model.with_untracked(|m| m.options())
    }
}

pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => " ⇅",
    }
}

pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(_) => "table__sort-indicator table__sort-indicator--active",
        None => "table__sort-indicator",
    }
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Receives the new value after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        // dropping the previous Timeout cancels it
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        pending.set_value(Some(timeout));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some(SortDirection::Asc)), " ▲");
        assert_eq!(get_sort_indicator(Some(SortDirection::Desc)), " ▼");
        assert_eq!(get_sort_indicator(None), " ⇅");
        assert!(get_sort_class(Some(SortDirection::Asc)).ends_with("--active"));
    }
}
