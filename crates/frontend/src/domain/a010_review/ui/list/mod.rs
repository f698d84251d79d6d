use contracts::domain::a010_review::aggregate::Review;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{date_cell, flag_cell, opt_text_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;

fn rating_cell(review: &Review) -> AnyView {
    view! {
        <span class="rating" title=format!("{} of 5", review.rating)>{review.stars()}</span>
    }
    .into_any()
}

#[component]
pub fn ReviewList() -> impl IntoView {
    let columns = vec![
        Column::new("product_name", "Product", |r: &Review| text_cell(&r.product_name)).width(180.0),
        Column::new("author_name", "Author", |r: &Review| text_cell(&r.author_name)),
        Column::new("rating", "Rating", rating_cell).width(110.0),
        Column::new("comment", "Comment", |r: &Review| opt_text_cell(r.comment.as_deref()))
            .unsorted()
            .width(260.0),
        Column::new("is_approved", "Status", |r: &Review| flag_cell(r.is_approved, "Approved", "Pending")),
        Column::new("created_at", "Date", |r: &Review| date_cell(&r.created_at)),
    ];

    view! {
        <ResourceList
            page_id="a010_review--list"
            title="Reviews"
            columns=columns
            initial_sort=("created_at", SortDirection::Desc)
            allow_create=false
            toggle_labels=("Reject", "Approve")
            search_placeholder="Search by product, author or comment..."
        />
    }
}
