use contracts::system::auth::{ResetPasswordRequest, RESET_PASSWORD_SCHEMA};
use contracts::shared::validation::{FormFields, FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::AuthCard;
use crate::shared::components::form_modal::SchemaFields;
use crate::shared::components::toast::use_toaster;
use crate::system::auth::api;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let params = use_params_map();
    let toaster = use_toaster();
    let navigate = use_navigate();

    let token = params.with_untracked(|p| p.get("token").unwrap_or_default());
    let fields = RwSignal::new(FormFields::new().with("token", token));
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match ResetPasswordRequest::from_form(&fields.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        set_is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::reset_password(&request).await {
                Ok(response) => {
                    toaster.success(response.message);
                    navigate("/login", Default::default());
                }
                Err(e) => toaster.error(e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Choose a new password">
            <Show when=move || errors.with(|e| e.for_field("token").is_some())>
                <div class="error-message">"This reset link is invalid. Request a new one."</div>
            </Show>
            <form on:submit=on_submit novalidate>
                <SchemaFields
                    schema=&RESET_PASSWORD_SCHEMA
                    fields=fields
                    errors=errors
                    disabled=is_loading
                    skip=&["token"]
                />
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Saving..." } else { "Set password" }}
                </button>
            </form>
            <div class="login-info">
                <A href="/forgot-password">"Request a new link"</A>
            </div>
        </AuthCard>
    }
}
