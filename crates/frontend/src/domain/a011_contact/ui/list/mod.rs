use contracts::domain::a011_contact::aggregate::ContactMessage;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{datetime_cell, flag_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;

const PREVIEW_CHARS: usize = 80;

#[component]
pub fn ContactMessageList() -> impl IntoView {
    let columns = vec![
        Column::new("name", "From", |m: &ContactMessage| text_cell(&m.name)).width(160.0),
        Column::new("email", "Email", |m: &ContactMessage| text_cell(&m.email)),
        Column::new("subject", "Subject", |m: &ContactMessage| text_cell(&m.subject)).width(200.0),
        Column::new("message", "Message", |m: &ContactMessage| text_cell(m.preview(PREVIEW_CHARS)))
            .unsorted()
            .width(280.0),
        Column::new("is_resolved", "Status", |m: &ContactMessage| flag_cell(m.is_resolved, "Resolved", "Open")),
        Column::new("created_at", "Received", |m: &ContactMessage| datetime_cell(&m.created_at)),
    ];

    view! {
        <ResourceList
            page_id="a011_contact--list"
            title="Contact messages"
            columns=columns
            initial_sort=("created_at", SortDirection::Desc)
            allow_create=false
            toggle_labels=("Reopen", "Resolve")
            search_placeholder="Search by sender, subject or message..."
        />
    }
}
