use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{
    date_cell, flag_cell, money_cell, text_cell, Column,
};
use crate::shared::components::resource_list::ResourceList;

fn stock_cell(product: &Product) -> AnyView {
    let class = if product.is_in_stock() {
        "table__cell--number"
    } else {
        "table__cell--number table__cell--warning"
    };
    view! { <span class=class>{product.stock}</span> }.into_any()
}

#[component]
pub fn ProductList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "Name", |p: &Product| text_cell(&p.name)).width(200.0),
        Column::new("sku", "SKU", |p: &Product| text_cell(&p.sku)),
        Column::new("category", "Category", |p: &Product| text_cell(&p.category)),
        Column::new("price", "Price", |p: &Product| money_cell(p.price)).right(),
        Column::new("stock", "Stock", stock_cell).right().width(80.0),
        Column::new("is_active", "Status", |p: &Product| flag_cell(p.is_active, "Active", "Hidden")),
        Column::new("created_at", "Created", |p: &Product| date_cell(&p.created_at)),
    ];

    view! {
        <ResourceList
            page_id="a001_product--list"
            title="Products"
            columns=columns
            initial_sort=("name", SortDirection::Asc)
            toggle_labels=("Hide", "Publish")
            search_placeholder="Search by name, SKU or category..."
        />
    }
}
