use contracts::system::auth::{LoginRequest, LOGIN_SCHEMA};
use contracts::shared::validation::{FormFields, FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::AuthCard;
use crate::shared::components::form_modal::SchemaFields;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let fields = RwSignal::new(FormFields::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    // Already signed in (e.g. restored session): go to the dashboard.
    let redirect = navigate.clone();
    Effect::new(move |_| {
        if auth_state.with(|s| s.is_authenticated()) {
            redirect("/", Default::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match LoginRequest::from_form(&fields.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        set_is_loading.set(true);
        set_error_message.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(request, set_auth_state).await {
                Ok(_) => navigate("/", Default::default()),
                Err(e) => set_error_message.set(Some(format!("Login failed: {e}"))),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Sign in">
            <Show when=move || error_message.get().is_some()>
                <div class="error-message">
                    {move || error_message.get().unwrap_or_default()}
                </div>
            </Show>

            <form on:submit=on_submit novalidate>
                <SchemaFields schema=&LOGIN_SCHEMA fields=fields errors=errors disabled=is_loading />

                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <div class="login-info">
                <A href="/forgot-password">"Forgot your password?"</A>
            </div>
        </AuthCard>
    }
}
