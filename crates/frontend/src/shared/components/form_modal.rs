//! Forms rendered from a [`FormSchema`].
//!
//! The caller owns the raw [`FormFields`] and the last [`ValidationErrors`];
//! these components only bind inputs to them.

use contracts::shared::validation::{
    FieldKind, FieldRule, FormFields, FormSchema, FormValues, ValidationErrors,
};
use leptos::prelude::*;

use crate::shared::modal_frame::ModalFrame;

fn read(fields: RwSignal<FormFields>, name: &'static str) -> String {
    fields.with(|f| f.value(name).unwrap_or_default().to_string())
}

fn write(fields: RwSignal<FormFields>, name: &'static str, value: String) {
    fields.update(|f| f.set(name, value));
}

/// One labelled input with its error line.
#[component]
pub fn SchemaField(
    rule: FieldRule,
    fields: RwSignal<FormFields>,
    #[prop(into)] errors: Signal<ValidationErrors>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let name = rule.field;
    let id = format!("field-{name}");
    let error = move || errors.with(|e| e.for_field(name).map(str::to_string));
    let label = if rule.required && rule.kind != FieldKind::Bool {
        format!("{} *", rule.label)
    } else {
        rule.label.to_string()
    };

    let input = match rule.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id.clone()
                class="form__textarea"
                rows="4"
                prop:value=move || read(fields, name)
                on:input=move |ev| write(fields, name, event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            />
        }
        .into_any(),
        FieldKind::Bool => view! {
            <input
                id=id.clone()
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || read(fields, name) == "true"
                on:change=move |ev| write(fields, name, event_target_checked(&ev).to_string())
                disabled=move || disabled.get().unwrap_or(false)
            />
        }
        .into_any(),
        FieldKind::Choice => {
            let placeholder = (!rule.required).then(|| view! { <option value="">"-"</option> });
            view! {
                <select
                    id=id.clone()
                    class="form__select"
                    prop:value=move || read(fields, name)
                    on:change=move |ev| write(fields, name, event_target_value(&ev))
                    disabled=move || disabled.get().unwrap_or(false)
                >
                    {placeholder}
                    {rule.options.iter().map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || read(fields, name) == option>
                                {option}
                            </option>
                        }
                    }).collect_view()}
                </select>
            }
            .into_any()
        }
        kind => {
            let step = match kind {
                FieldKind::Number => Some("0.01"),
                FieldKind::Integer => Some("1"),
                _ => None,
            };
            view! {
                <input
                    id=id.clone()
                    type=kind.input_type()
                    class="form__input"
                    step=step
                    prop:value=move || read(fields, name)
                    on:input=move |ev| write(fields, name, event_target_value(&ev))
                    disabled=move || disabled.get().unwrap_or(false)
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form__group" class:form__group--invalid=move || error().is_some()>
            <label class="form__label" for=id>{label}</label>
            {input}
            {move || error().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}

/// Every field of a schema, in declaration order. `skip` hides fields the
/// surrounding page fills in itself.
#[component]
pub fn SchemaFields(
    schema: &'static FormSchema,
    fields: RwSignal<FormFields>,
    #[prop(into)] errors: Signal<ValidationErrors>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] skip: &'static [&'static str],
) -> impl IntoView {
    schema
        .rules
        .iter()
        .filter(|rule| !skip.contains(&rule.field))
        .map(|rule| view! { <SchemaField rule=*rule fields=fields errors=errors disabled=disabled /> })
        .collect_view()
}

/// Create/edit dialog for one record.
#[component]
pub fn FormModal(
    #[prop(into)] title: String,
    schema: &'static FormSchema,
    fields: RwSignal<FormFields>,
    #[prop(into)] errors: Signal<ValidationErrors>,
    #[prop(into)] saving: Signal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional)] skip: &'static [&'static str],
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !saving.get_untracked() {
            on_submit.run(());
        }
    };

    view! {
        <ModalFrame on_close=on_cancel modal_class="form-modal">
            <form class="form" on:submit=handle_submit>
                <div class="modal__header">
                    <h2 class="modal__title">{title}</h2>
                </div>
                <div class="modal__body">
                    <SchemaFields schema=schema fields=fields errors=errors disabled=saving skip=skip />
                </div>
                <div class="modal__footer">
                    <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
