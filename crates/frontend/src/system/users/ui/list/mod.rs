use contracts::system::auth::Role;
use contracts::system::users::User;
use contracts::shared::table::SortDirection;
use leptos::prelude::*;

use crate::shared::components::entity_table::{
    date_cell, datetime_cell, flag_cell, opt_text_cell, text_cell, Column,
};
use crate::shared::components::resource_list::ResourceList;
use crate::system::auth::guard::RequireRole;

fn last_login_cell(user: &User) -> AnyView {
    match user.last_login_at.as_deref() {
        Some(at) => datetime_cell(at),
        None => text_cell("Never"),
    }
}

#[component]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireRole allowed=Role::can_manage_staff>
            <UsersList />
        </RequireRole>
    }
}

#[component]
fn UsersList() -> impl IntoView {
    let columns = vec![
        Column::new("email", "Email", |u: &User| text_cell(&u.email)).width(200.0),
        Column::new("full_name", "Full name", |u: &User| opt_text_cell(u.full_name.as_deref())).width(180.0),
        Column::new("role", "Role", |u: &User| text_cell(u.role.display_name())),
        Column::new("is_active", "Status", |u: &User| flag_cell(u.is_active, "Active", "Blocked")),
        Column::new("created_at", "Created", |u: &User| date_cell(&u.created_at)),
        Column::new("last_login_at", "Last login", last_login_cell),
    ];

    view! {
        <ResourceList
            page_id="sys_users--list"
            title="Users"
            columns=columns
            initial_sort=("email", SortDirection::Asc)
            toggle_labels=("Block", "Unblock")
            search_placeholder="Search by email, name or role..."
        />
    }
}
