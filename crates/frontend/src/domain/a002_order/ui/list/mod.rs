use contracts::domain::a002_order::aggregate::{Order, OrderStatus, UpdateOrderStatus};
use contracts::shared::resource::Resource;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils;
use crate::shared::components::entity_table::{datetime_cell, money_cell, text_cell, Column};
use crate::shared::components::resource_list::{use_list_refresh, ResourceList};
use crate::shared::components::toast::use_toaster;
use crate::shared::crud_api;

fn status_label(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "Pending",
        OrderStatus::Processing => "Processing",
        OrderStatus::Shipped => "Shipped",
        OrderStatus::Delivered => "Delivered",
        OrderStatus::Cancelled => "Cancelled",
    }
}

async fn update_status(order_id: &str, status: OrderStatus) -> Result<(), String> {
    let path = format!("{}/status", crud_api::item_path::<Order>(order_id));
    api_utils::patch_body(&path, &UpdateOrderStatus { status }).await
}

/// Inline status change. Final orders show a read-only badge.
#[component]
fn OrderStatusSelect(order_id: String, status: OrderStatus) -> impl IntoView {
    let toaster = use_toaster();
    let refresh = use_list_refresh();
    let (busy, set_busy) = signal(false);
    let order_id = StoredValue::new(order_id);

    if status.is_final() {
        return view! {
            <span class=format!("badge badge--{}", status.as_str())>{status_label(status)}</span>
        }
        .into_any();
    }

    let on_change = move |ev: leptos::ev::Event| {
        let Some(next) = OrderStatus::parse(&event_target_value(&ev)) else {
            return;
        };
        if next == status {
            return;
        }
        set_busy.set(true);
        let id = order_id.get_value();
        spawn_local(async move {
            match update_status(&id, next).await {
                Ok(()) => {
                    toaster.success(format!("{} marked as {}", Order::TITLE, status_label(next).to_lowercase()));
                    if let Some(refresh) = refresh {
                        refresh.run(());
                    }
                }
                Err(e) => toaster.error(e),
            }
            set_busy.set(false);
        });
    };

    view! {
        <select class="table__select" on:change=on_change disabled=move || busy.get()>
            {OrderStatus::ALL
                .into_iter()
                .map(|s| view! {
                    <option value=s.as_str() selected={s == status}>{status_label(s)}</option>
                })
                .collect_view()}
        </select>
    }
    .into_any()
}

fn status_cell(order: &Order) -> AnyView {
    view! { <OrderStatusSelect order_id=order.id.clone() status=order.status /> }.into_any()
}

#[component]
pub fn OrderList() -> impl IntoView {
    let columns = vec![
        Column::new("order_number", "Order", |o: &Order| text_cell(&o.order_number)),
        Column::new("customer_name", "Customer", |o: &Order| text_cell(&o.customer_name)).width(180.0),
        Column::new("customer_email", "Email", |o: &Order| text_cell(&o.customer_email)),
        Column::new("items", "Items", |o: &Order| text_cell(o.item_count().to_string())).right().width(70.0),
        Column::new("total", "Total", |o: &Order| money_cell(o.total)).right(),
        Column::new("status", "Status", status_cell).width(140.0),
        Column::new("created_at", "Placed", |o: &Order| datetime_cell(&o.created_at)),
    ];

    view! {
        <ResourceList
            page_id="a002_order--list"
            title="Orders"
            columns=columns
            initial_sort=("created_at", SortDirection::Desc)
            live=true
            allow_create=false
            search_placeholder="Search by order number, customer or email..."
        />
    }
}
