use contracts::domain::a005_inventory::aggregate::InventoryItem;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{
    datetime_cell, flag_cell, opt_text_cell, text_cell, Column,
};
use crate::shared::components::resource_list::ResourceList;

fn quantity_cell(item: &InventoryItem) -> AnyView {
    let class = if item.is_low_stock() {
        "table__cell--number table__cell--warning"
    } else {
        "table__cell--number"
    };
    view! { <span class=class>{item.quantity}</span> }.into_any()
}

#[component]
pub fn InventoryList() -> impl IntoView {
    let columns = vec![
        Column::new("product_name", "Product", |i: &InventoryItem| text_cell(&i.product_name)).width(200.0),
        Column::new("sku", "SKU", |i: &InventoryItem| text_cell(&i.sku)),
        Column::new("quantity", "Quantity", quantity_cell).right(),
        Column::new("reorder_level", "Reorder at", |i: &InventoryItem| text_cell(i.reorder_level.to_string())).right(),
        Column::new("low_stock", "Stock", |i: &InventoryItem| flag_cell(!i.is_low_stock(), "OK", "Low")),
        Column::new("location", "Location", |i: &InventoryItem| opt_text_cell(i.location.as_deref())),
        Column::new("updated_at", "Updated", |i: &InventoryItem| datetime_cell(&i.updated_at)),
    ];

    view! {
        <ResourceList
            page_id="a005_inventory--list"
            title="Inventory"
            columns=columns
            initial_sort=("quantity", SortDirection::Asc)
            search_placeholder="Search by product, SKU or location..."
        />
    }
}
