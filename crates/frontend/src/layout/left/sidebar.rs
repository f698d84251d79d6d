//! Sidebar with collapsible groups, filtered by the user's role.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::routes::routes::nav_groups_for;
use crate::shared::icons::icon;
use crate::system::auth::context::current_role;

#[component]
pub fn Sidebar() -> impl IntoView {
    let role = current_role();
    let pathname = use_location().pathname;
    let collapsed = RwSignal::new(Vec::<&'static str>::new());

    let is_active = move |path: &'static str| {
        pathname.with(|current| current == path || current.starts_with(&format!("{path}/")))
    };

    view! {
        <nav class="app-sidebar__content">
            <A href="/" attr:class="app-sidebar__item">
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>"Dashboard"</span>
                </div>
            </A>
            {move || {
                role.get()
                    .map(nav_groups_for)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(label, items)| {
                        let is_open = move || !collapsed.with(|c| c.contains(&label));
                        view! {
                            <div class="app-sidebar__group">
                                <div
                                    class="app-sidebar__group-title"
                                    on:click=move |_| collapsed.update(|c| {
                                        if let Some(pos) = c.iter().position(|g| *g == label) {
                                            c.remove(pos);
                                        } else {
                                            c.push(label);
                                        }
                                    })
                                >
                                    <span>{label}</span>
                                    <span
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=is_open
                                    >
                                        {icon("chevron-right")}
                                    </span>
                                </div>
                                <Show when=is_open>
                                    <div class="app-sidebar__children">
                                        {items
                                            .iter()
                                            .copied()
                                            .map(|item| {
                                                let path = item.path;
                                                view! {
                                                    <A
                                                        href=path
                                                        attr:class=move || if is_active(path) {
                                                            "app-sidebar__item app-sidebar__item--active"
                                                        } else {
                                                            "app-sidebar__item"
                                                        }
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(item.icon)}
                                                            <span>{item.label}</span>
                                                        </div>
                                                    </A>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
