use contracts::system::auth::{ForgotPasswordRequest, FORGOT_PASSWORD_SCHEMA};
use contracts::shared::validation::{FormFields, FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::AuthCard;
use crate::shared::components::form_modal::SchemaFields;
use crate::system::auth::api;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let fields = RwSignal::new(FormFields::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (result, set_result) = signal(Option::<Result<String, String>>::None);
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match ForgotPasswordRequest::from_form(&fields.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        set_is_loading.set(true);

        spawn_local(async move {
            let outcome = api::forgot_password(&request).await.map(|r| r.message);
            set_result.set(Some(outcome));
            set_is_loading.set(false);
        });
    };

    view! {
        <AuthCard title="Reset your password">
            {move || match result.get() {
                Some(Ok(message)) => view! { <div class="success-message">{message}</div> }.into_any(),
                Some(Err(e)) => view! { <div class="error-message">{e}</div> }.into_any(),
                None => ().into_any(),
            }}

            <form on:submit=on_submit novalidate>
                <SchemaFields schema=&FORGOT_PASSWORD_SCHEMA fields=fields errors=errors disabled=is_loading />
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Sending..." } else { "Send reset link" }}
                </button>
            </form>

            <div class="login-info">
                <A href="/login">"Back to sign in"</A>
            </div>
        </AuthCard>
    }
}
