use contracts::domain::a009_job_application::aggregate::JobApplication;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{datetime_cell, opt_text_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;

fn status_cell(application: &JobApplication) -> AnyView {
    let status = application.status;
    let class = if status.is_closed() {
        format!("badge badge--{} badge--muted", status.as_str())
    } else {
        format!("badge badge--{}", status.as_str())
    };
    view! { <span class=class>{status.display_name()}</span> }.into_any()
}

fn resume_cell(application: &JobApplication) -> AnyView {
    match application.resume_url.clone() {
        Some(url) => view! { <a href=url target="_blank" rel="noopener">"Resume"</a> }.into_any(),
        None => text_cell("-"),
    }
}

#[component]
pub fn JobApplicationList() -> impl IntoView {
    let columns = vec![
        Column::new("applicant_name", "Applicant", |a: &JobApplication| text_cell(&a.applicant_name)).width(180.0),
        Column::new("job_title", "Position", |a: &JobApplication| text_cell(&a.job_title)),
        Column::new("email", "Email", |a: &JobApplication| text_cell(&a.email)),
        Column::new("phone", "Phone", |a: &JobApplication| opt_text_cell(a.phone.as_deref())).unsorted(),
        Column::new("resume_url", "Resume", resume_cell).unsorted().width(80.0),
        Column::new("status", "Status", status_cell),
        Column::new("applied_at", "Applied", |a: &JobApplication| datetime_cell(&a.applied_at)),
    ];

    view! {
        <ResourceList
            page_id="a009_job_application--list"
            title="Job applications"
            columns=columns
            initial_sort=("applied_at", SortDirection::Desc)
            allow_create=false
            search_placeholder="Search by applicant, position or email..."
        />
    }
}
