use contracts::domain::a007_faq::aggregate::Faq;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{flag_cell, opt_text_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;

#[component]
pub fn FaqList() -> impl IntoView {
    let columns = vec![
        Column::new("sort_order", "#", |f: &Faq| text_cell(f.sort_order.to_string())).right().width(50.0),
        Column::new("question", "Question", |f: &Faq| text_cell(&f.question)).width(320.0),
        Column::new("category", "Category", |f: &Faq| opt_text_cell(f.category.as_deref())),
        Column::new("is_published", "Status", |f: &Faq| flag_cell(f.is_published, "Published", "Draft")),
    ];

    view! {
        <ResourceList
            page_id="a007_faq--list"
            title="FAQ"
            columns=columns
            initial_sort=("sort_order", SortDirection::Asc)
            toggle_labels=("Unpublish", "Publish")
            search_placeholder="Search questions and answers..."
        />
    }
}
