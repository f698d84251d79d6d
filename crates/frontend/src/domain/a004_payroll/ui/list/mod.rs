use contracts::domain::a004_payroll::aggregate::{Payroll, PayrollStatus};
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{
    datetime_cell, flag_cell, money_cell, text_cell, Column,
};
use crate::shared::components::resource_list::ResourceList;

fn paid_at_cell(entry: &Payroll) -> AnyView {
    match entry.paid_at.as_deref() {
        Some(at) => datetime_cell(at),
        None => text_cell("-"),
    }
}

#[component]
pub fn PayrollList() -> impl IntoView {
    let columns = vec![
        Column::new("period", "Period", |p: &Payroll| text_cell(&p.period)).width(90.0),
        Column::new("staff_name", "Staff member", |p: &Payroll| text_cell(&p.staff_name)).width(180.0),
        Column::new("gross", "Gross", |p: &Payroll| money_cell(p.gross)).right(),
        Column::new("deductions", "Deductions", |p: &Payroll| money_cell(p.deductions)).right(),
        Column::new("net", "Net", |p: &Payroll| money_cell(p.net())).right(),
        Column::new("status", "Status", |p: &Payroll| {
            flag_cell(p.status == PayrollStatus::Paid, "Paid", "Pending")
        }),
        Column::new("paid_at", "Paid at", paid_at_cell),
    ];

    view! {
        <ResourceList
            page_id="a004_payroll--list"
            title="Payroll"
            columns=columns
            initial_sort=("period", SortDirection::Desc)
            toggle_labels=("Mark pending", "Mark paid")
            search_placeholder="Search by staff member or period..."
        />
    }
}
