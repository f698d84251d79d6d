use contracts::domain::a003_staff::aggregate::Staff;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{
    date_cell, flag_cell, money_cell, opt_text_cell, text_cell, Column,
};
use crate::shared::components::resource_list::ResourceList;

#[component]
pub fn StaffList() -> impl IntoView {
    let columns = vec![
        Column::new("full_name", "Name", |s: &Staff| text_cell(&s.full_name)).width(180.0),
        Column::new("email", "Email", |s: &Staff| text_cell(&s.email)),
        Column::new("phone", "Phone", |s: &Staff| opt_text_cell(s.phone.as_deref())).unsorted(),
        Column::new("position", "Position", |s: &Staff| text_cell(&s.position)),
        Column::new("department", "Department", |s: &Staff| text_cell(&s.department)),
        Column::new("salary", "Salary", |s: &Staff| money_cell(s.salary)).right(),
        Column::new("hired_at", "Hired", |s: &Staff| date_cell(&s.hired_at)),
        Column::new("is_active", "Status", |s: &Staff| flag_cell(s.is_active, "Active", "Inactive")),
    ];

    view! {
        <ResourceList
            page_id="a003_staff--list"
            title="Staff"
            columns=columns
            initial_sort=("full_name", SortDirection::Asc)
            toggle_labels=("Deactivate", "Activate")
            search_placeholder="Search by name, email, position..."
        />
    }
}
