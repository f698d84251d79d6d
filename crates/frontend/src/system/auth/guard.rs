use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

/// Renders children for a signed-in user, otherwise redirects to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();
    let children = StoredValue::new(children);

    move || {
        let state = auth_state.get();
        if state.is_authenticated() {
            children.with_value(|c| c()).into_any()
        } else if state.restoring {
            view! { <div class="page-loading">"Loading..."</div> }.into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}

/// Component that requires one of the given roles.
/// Shows fallback if the role does not match
#[component]
pub fn RequireRole(allowed: fn(&Role) -> bool, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.role().is_some_and(|r| allowed(&r)))
            fallback=|| view! { <div class="access-denied">"Access denied."</div> }
        >
            {children()}
        </Show>
    }
}
