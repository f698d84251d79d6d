//! Top bar: sidebar toggle, title, theme switch, user menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelector;
use crate::system::auth::context::{do_logout, use_auth};

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            do_logout(set_auth_state).await;
            navigate("/login", Default::default());
        });
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if ctx.left_open.get() { icon("chevron-left") } else { icon("chevron-right") }}
                </button>
                <span class="top-header__title">"Shop Back Office"</span>
            </div>

            <div class="top-header__actions">
                <ThemeSelector />

                <div class="top-header__user">
                    {icon("users")}
                    <span>
                        {move || auth_state.with(|s| {
                            s.user_info
                                .as_ref()
                                .map(|u| format!("{} ({})", u.display_name(), u.role.display_name()))
                                .unwrap_or_else(|| "Guest".to_string())
                        })}
                    </span>
                </div>

                <A href="/change-password" attr:class="top-header__icon-btn" attr:title="Change password">
                    {icon("key")}
                </A>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
