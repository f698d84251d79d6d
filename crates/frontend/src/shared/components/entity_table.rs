//! Paginated, sortable table of [`Resource`] records with row actions.

use contracts::shared::money::format_money;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use thaw::*;

use super::table::SortableHeaderCell;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::TableViewHandle;

/// Column definition. `key` is the sort key handed to `Sortable`.
pub struct Column<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub align: &'static str,
    pub sortable: bool,
    pub min_width: f64,
    pub cell: fn(&R) -> AnyView,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub fn new(key: &'static str, label: &'static str, cell: fn(&R) -> AnyView) -> Self {
        Self {
            key,
            label,
            align: "left",
            sortable: true,
            min_width: 100.0,
            cell,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = "right";
        self
    }

    pub fn unsorted(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn width(mut self, min_width: f64) -> Self {
        self.min_width = min_width;
        self
    }
}

pub fn text_cell(text: impl Into<String>) -> AnyView {
    let text: String = text.into();
    view! { <TableCellLayout truncate=true>{text}</TableCellLayout> }.into_any()
}

pub fn opt_text_cell(text: Option<&str>) -> AnyView {
    text_cell(text.unwrap_or("-"))
}

pub fn money_cell(amount: f64) -> AnyView {
    view! { <span class="table__cell--money">{format_money(amount)}</span> }.into_any()
}

pub fn date_cell(value: &str) -> AnyView {
    text_cell(format_date(value))
}

pub fn datetime_cell(value: &str) -> AnyView {
    text_cell(format_datetime(value))
}

pub fn flag_cell(on: bool, on_label: &'static str, off_label: &'static str) -> AnyView {
    let (class, label) = if on {
        ("badge badge--success", on_label)
    } else {
        ("badge badge--neutral", off_label)
    };
    view! { <span class=class>{label}</span> }.into_any()
}

#[component]
pub fn EntityTable<R>(
    table: TableViewHandle<R>,
    columns: Vec<Column<R>>,
    #[prop(default = None)] on_edit: Option<Callback<R>>,
    #[prop(default = None)] on_delete: Option<Callback<R>>,
    #[prop(default = None)] on_toggle: Option<Callback<R>>,
    /// Button labels for the toggle action: (when enabled, when disabled)
    #[prop(default = None)]
    toggle_labels: Option<(&'static str, &'static str)>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView
where
    R: Resource + PartialEq + Send + Sync + 'static,
{
    let columns = StoredValue::new(columns);
    let rows = table.paginated_data();
    let (disable_label, enable_label) = toggle_labels.unwrap_or(("Disable", "Enable"));
    let has_actions = on_edit.is_some() || on_delete.is_some() || on_toggle.is_some();
    let empty_text = empty_text.unwrap_or_else(|| "Nothing to show".to_string());
    let column_count = columns.with_value(|c| c.len()) + usize::from(has_actions);
    let on_sort = Callback::new(move |key: String| table.handle_sort(&key));

    let header = columns.with_value(|cols| {
        cols.iter()
            .copied()
            .map(|col| {
                if col.sortable {
                    view! {
                        <SortableHeaderCell
                            label=col.label
                            sort_key=col.key
                            direction=table.get_sort_direction(col.key)
                            on_sort=on_sort
                            min_width=col.min_width
                            align=col.align
                        />
                    }
                    .into_any()
                } else {
                    view! { <TableHeaderCell min_width=col.min_width>{col.label}</TableHeaderCell> }
                        .into_any()
                }
            })
            .collect_view()
    });

    let render_actions = move |record: &R| {
        let edit = on_edit.map(|cb| {
            let record = record.clone();
            view! {
                <button class="button button--ghost button--small" title="Edit" on:click=move |_| cb.run(record.clone())>
                    {icon("edit")}
                </button>
            }
        });
        let toggle = on_toggle.map(|cb| {
            let enabled = record.is_enabled().unwrap_or(false);
            let record = record.clone();
            view! {
                <button class="button button--ghost button--small" on:click=move |_| cb.run(record.clone())>
                    {icon("power")}
                    {if enabled { disable_label } else { enable_label }}
                </button>
            }
        });
        let delete = on_delete.map(|cb| {
            let record = record.clone();
            view! {
                <button class="button button--ghost button--small button--danger" title="Delete" on:click=move |_| cb.run(record.clone())>
                    {icon("delete")}
                </button>
            }
        });
        view! { <TableCell><div class="table__actions">{edit}{toggle}{delete}</div></TableCell> }
    };

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {header}
                        {has_actions.then(|| view! { <TableHeaderCell min_width=120.0>""</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            let text = empty_text.clone();
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=column_count.to_string()>
                                        <div class="table__empty">{text}</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.iter()
                            .map(|record| {
                                let cells = columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            let class = if col.align == "right" { "table__cell table__cell--right" } else { "table__cell" };
                                            let content = (col.cell)(record);
                                            view! { <TableCell><div class=class>{content}</div></TableCell> }
                                        })
                                        .collect_view()
                                });
                                let actions = has_actions.then(|| render_actions(record));
                                view! { <TableRow>{cells}{actions}</TableRow> }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
