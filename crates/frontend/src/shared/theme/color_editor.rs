//! Live palette editor. Valid input is previewed immediately; saving creates
//! a theme record and makes it the current palette.

use contracts::domain::a006_theme::aggregate::{ThemeConfig, ThemeDraft, THEME_SCHEMA};
use contracts::shared::validation::{FromForm, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::use_theme;
use crate::shared::components::form_modal::SchemaFields;
use crate::shared::components::resource_list::use_list_refresh;
use crate::shared::components::toast::use_toaster;
use crate::shared::crud_api;

#[component]
pub fn ColorEditor() -> impl IntoView {
    let ctx = use_theme();
    let toaster = use_toaster();
    let refresh = use_list_refresh();

    let fields = RwSignal::new(ctx.palette.with_untracked(|p| p.to_form()));
    let errors = RwSignal::new(ValidationErrors::default());
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        let current = fields.get();
        match ThemeDraft::from_form(&current) {
            Ok(draft) => {
                ctx.preview(&draft);
                errors.set(ValidationErrors::default());
            }
            Err(e) => errors.set(e),
        }
    });
    on_cleanup(move || ctx.restore());

    let reset = move |_| {
        fields.set(ctx.palette.with_untracked(|p| p.to_form()));
    };

    let defaults = move |_| {
        fields.set(ThemeDraft::default().to_form());
    };

    let save = move |_| {
        let draft = match ThemeDraft::from_form(&fields.get_untracked()) {
            Ok(draft) => draft,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            let result = crud_api::create::<ThemeConfig>(&draft).await;
            set_saving.set(false);
            match result {
                Ok(()) => {
                    ctx.set_palette(draft);
                    toaster.success("Theme saved");
                    if let Some(refresh) = refresh {
                        refresh.run(());
                    }
                }
                Err(e) => toaster.error(e),
            }
        });
    };

    view! {
        <div class="color-editor">
            <h2 class="color-editor__title">"Palette editor"</h2>
            <div class="color-editor__fields">
                <SchemaFields schema=&THEME_SCHEMA fields=fields errors=errors disabled=saving />
            </div>
            <div class="color-editor__preview">
                <span class="color-editor__swatch" style="background: var(--color-primary);">"Primary"</span>
                <span class="color-editor__swatch" style="background: var(--color-secondary);">"Secondary"</span>
                <span class="color-editor__swatch" style="background: var(--color-background); color: var(--color-text);">"Text"</span>
            </div>
            <div class="color-editor__actions">
                <button class="button button--secondary" on:click=defaults>"Defaults"</button>
                <button class="button button--secondary" on:click=reset>"Reset"</button>
                <button class="button button--primary" on:click=save disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save as theme" }}
                </button>
            </div>
        </div>
    }
}
