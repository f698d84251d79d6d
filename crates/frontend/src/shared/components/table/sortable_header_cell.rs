//! Sortable table header cell.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_key="price"
//!     direction=table.get_sort_direction("price")
//!     on_sort=Callback::new(move |key: String| table.handle_sort(&key))
//!     align="right"
//! />
//! ```

use contracts::shared::table::SortDirection;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    /// Key passed to `Sortable::sort_value`
    #[prop(into)]
    sort_key: String,

    /// Active direction for this column, `None` when another column sorts
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)] min_width: f64,

    /// left/right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let handle_click = move |_| on_sort.run(sort_key.clone());

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    let aria_sort = move || match direction.get() {
        Some(SortDirection::Asc) => "ascending",
        Some(SortDirection::Desc) => "descending",
        None => "none",
    };

    view! {
        <TableHeaderCell min_width=min_width attr:aria-sort=aria_sort>
            <div class="table__sortable-header" style=header_style on:click=handle_click>
                {label}
                <span class=move || get_sort_class(direction.get())>
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
