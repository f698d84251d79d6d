use contracts::domain::a008_job_posting::aggregate::{employment_type_label, JobPosting};
use contracts::shared::money::format_money;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{date_cell, flag_cell, text_cell, Column};
use crate::shared::components::resource_list::ResourceList;

fn salary_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{} - {}", format_money(min), format_money(max)),
        (Some(min), None) => format!("from {}", format_money(min)),
        (None, Some(max)) => format!("up to {}", format_money(max)),
        (None, None) => "-".to_string(),
    }
}

#[component]
pub fn JobPostingList() -> impl IntoView {
    let columns = vec![
        Column::new("title", "Title", |j: &JobPosting| text_cell(&j.title)).width(200.0),
        Column::new("department", "Department", |j: &JobPosting| text_cell(&j.department)),
        Column::new("location", "Location", |j: &JobPosting| text_cell(&j.location)),
        Column::new("employment_type", "Type", |j: &JobPosting| {
            text_cell(employment_type_label(&j.employment_type))
        }),
        Column::new("salary_min", "Salary", |j: &JobPosting| {
            text_cell(salary_range(j.salary_min, j.salary_max))
        })
        .right()
        .width(160.0),
        Column::new("is_open", "Status", |j: &JobPosting| flag_cell(j.is_open, "Open", "Closed")),
        Column::new("posted_at", "Posted", |j: &JobPosting| date_cell(&j.posted_at)),
    ];

    view! {
        <ResourceList
            page_id="a008_job_posting--list"
            title="Job postings"
            columns=columns
            initial_sort=("posted_at", SortDirection::Desc)
            toggle_labels=("Close", "Reopen")
            search_placeholder="Search by title, department or location..."
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_range() {
        assert_eq!(salary_range(Some(50000.0), Some(70000.0)), "50,000.00 - 70,000.00");
        assert_eq!(salary_range(None, Some(1000.0)), "up to 1,000.00");
        assert_eq!(salary_range(None, None), "-");
    }
}
