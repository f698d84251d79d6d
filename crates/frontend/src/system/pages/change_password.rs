use contracts::system::auth::{ChangePasswordRequest, CHANGE_PASSWORD_SCHEMA};
use contracts::shared::validation::{FormFields, FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::form_modal::SchemaFields;
use crate::shared::components::toast::use_toaster;
use crate::shared::page_frame::{PageFrame, PageHeader};
use crate::system::auth::api;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let toaster = use_toaster();
    let fields = RwSignal::new(FormFields::new());
    let errors = RwSignal::new(ValidationErrors::default());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match ChangePasswordRequest::from_form(&fields.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        set_is_loading.set(true);

        spawn_local(async move {
            match api::change_password(&request).await {
                Ok(response) => {
                    toaster.success(response.message);
                    fields.set(FormFields::new());
                }
                Err(e) => toaster.error(e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <PageFrame page_id="change-password">
            <PageHeader title="Change password" />
            <form class="form-narrow" on:submit=on_submit novalidate>
                <SchemaFields schema=&CHANGE_PASSWORD_SCHEMA fields=fields errors=errors disabled=is_loading />
                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Saving..." } else { "Update password" }}
                </button>
            </form>
        </PageFrame>
    }
}
