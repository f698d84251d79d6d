use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes, A};
use leptos_router::path;

use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_order::ui::list::OrderList;
use crate::domain::a003_staff::ui::list::StaffList;
use crate::domain::a004_payroll::ui::list::PayrollList;
use crate::domain::a005_inventory::ui::list::InventoryList;
use crate::domain::a006_theme::ui::list::ThemeList;
use crate::domain::a007_faq::ui::list::FaqList;
use crate::domain::a008_job_posting::ui::list::JobPostingList;
use crate::domain::a009_job_application::ui::list::JobApplicationList;
use crate::domain::a010_review::ui::list::ReviewList;
use crate::domain::a011_contact::ui::list::ContactMessageList;
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::system::auth::context::{current_role, use_auth};
use crate::system::auth::guard::{RequireAuth, RequireRole};
use crate::system::pages::change_password::ChangePasswordPage;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::reset_password::ResetPasswordPage;
use crate::system::users::ui::list::UsersListPage;
use crate::usecases::u001_checkout::view::CheckoutPage;

#[derive(Clone, Copy)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub allowed: fn(&Role) -> bool,
}

#[derive(Clone, Copy)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

fn any_role(_: &Role) -> bool {
    true
}

const fn back_office(path: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        path,
        label,
        icon,
        allowed: Role::can_manage_catalog,
    }
}

const fn admin(path: &'static str, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        path,
        label,
        icon,
        allowed: Role::can_manage_staff,
    }
}

pub const NAV_GROUPS: &[NavGroup] = &[
    NavGroup {
        label: "Catalog",
        items: &[
            back_office("/products", "Products", "products"),
            back_office("/inventory", "Inventory", "inventory"),
            back_office("/reviews", "Reviews", "reviews"),
        ],
    },
    NavGroup {
        label: "Sales",
        items: &[
            back_office("/orders", "Orders", "orders"),
            NavItem {
                path: "/checkout",
                label: "Checkout",
                icon: "cart",
                allowed: any_role,
            },
        ],
    },
    NavGroup {
        label: "People",
        items: &[
            admin("/staff", "Staff", "staff"),
            admin("/payroll", "Payroll", "payroll"),
            back_office("/job-postings", "Job postings", "jobs"),
            back_office("/job-applications", "Applications", "applications"),
        ],
    },
    NavGroup {
        label: "Content",
        items: &[
            back_office("/faq", "FAQ", "faq"),
            back_office("/contact-messages", "Contact messages", "contact"),
        ],
    },
    NavGroup {
        label: "Settings",
        items: &[
            admin("/themes", "Themes", "palette"),
            admin("/users", "Users", "users"),
        ],
    },
];

/// Navigation visible to a role; empty groups are dropped.
pub fn nav_groups_for(role: Role) -> Vec<(&'static str, Vec<NavItem>)> {
    NAV_GROUPS
        .iter()
        .filter_map(|group| {
            let items: Vec<NavItem> = group
                .items
                .iter()
                .copied()
                .filter(|item| (item.allowed)(&role))
                .collect();
            (!items.is_empty()).then_some((group.label, items))
        })
        .collect()
}

#[component]
fn ProtectedLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

/// Landing page: a card per section the user can open.
#[component]
fn HomePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let role = current_role();
    let greeting = move || {
        auth_state.with(|s| {
            s.user_info
                .as_ref()
                .map(|u| format!("Welcome, {}", u.display_name()))
                .unwrap_or_else(|| "Welcome".to_string())
        })
    };

    view! {
        <PageFrame page_id="home--dashboard">
            <PageHeader title=greeting() />
            <div class="home-grid">
                {move || {
                    role.get()
                        .map(nav_groups_for)
                        .unwrap_or_default()
                        .into_iter()
                        .flat_map(|(_, items)| items)
                        .map(|item| view! {
                            <A href=item.path attr:class="home-card">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </A>
                        })
                        .collect_view()
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <A href="/">"Back to the dashboard"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <Route path=path!("/reset-password/:token") view=ResetPasswordPage />
                <ParentRoute path=path!("") view=ProtectedLayout>
                    <Route path=path!("") view=HomePage />
                    <Route path=path!("change-password") view=ChangePasswordPage />
                    <Route path=path!("checkout") view=CheckoutPage />
                    <Route path=path!("products") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><ProductList /></RequireRole>
                    } />
                    <Route path=path!("inventory") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><InventoryList /></RequireRole>
                    } />
                    <Route path=path!("reviews") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><ReviewList /></RequireRole>
                    } />
                    <Route path=path!("orders") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><OrderList /></RequireRole>
                    } />
                    <Route path=path!("job-postings") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><JobPostingList /></RequireRole>
                    } />
                    <Route path=path!("job-applications") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><JobApplicationList /></RequireRole>
                    } />
                    <Route path=path!("faq") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><FaqList /></RequireRole>
                    } />
                    <Route path=path!("contact-messages") view=|| view! {
                        <RequireRole allowed=Role::can_manage_catalog><ContactMessageList /></RequireRole>
                    } />
                    <Route path=path!("staff") view=|| view! {
                        <RequireRole allowed=Role::can_manage_staff><StaffList /></RequireRole>
                    } />
                    <Route path=path!("payroll") view=|| view! {
                        <RequireRole allowed=Role::can_manage_staff><PayrollList /></RequireRole>
                    } />
                    <Route path=path!("themes") view=|| view! {
                        <RequireRole allowed=Role::can_manage_staff><ThemeList /></RequireRole>
                    } />
                    <Route path=path!("users") view=UsersListPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(role: Role) -> Vec<&'static str> {
        nav_groups_for(role)
            .into_iter()
            .flat_map(|(_, items)| items)
            .map(|item| item.path)
            .collect()
    }

    #[test]
    fn test_customer_only_sees_checkout() {
        assert_eq!(paths(Role::Customer), vec!["/checkout"]);
        assert_eq!(nav_groups_for(Role::Customer).len(), 1);
    }

    #[test]
    fn test_staff_has_no_admin_sections() {
        let staff = paths(Role::Staff);
        assert!(staff.contains(&"/orders"));
        assert!(!staff.contains(&"/payroll"));
        assert!(!staff.contains(&"/users"));
        assert!(nav_groups_for(Role::Staff).iter().all(|(label, _)| *label != "Settings"));
    }

    #[test]
    fn test_admin_sees_everything() {
        let total: usize = NAV_GROUPS.iter().map(|g| g.items.len()).sum();
        assert_eq!(paths(Role::Admin).len(), total);
    }
}
