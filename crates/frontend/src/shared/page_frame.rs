//! Root wrapper and header shared by every page.

use leptos::prelude::*;

/// Sets `id` (`"{entity}--{kind}"`, e.g. `"a001_product--list"`) and the
/// page class on the root element.
#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// Additional CSS classes appended after `page`.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let full_class = if class.is_empty() {
        "page".to_string()
    } else {
        format!("page {class}")
    };

    view! {
        <div id=page_id class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    /// Buttons rendered on the right.
    #[prop(optional)]
    actions: Option<Children>,
    /// Extra content next to the title (counters, badges).
    #[prop(optional)]
    aside: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {aside.map(|aside| aside())}
            </div>
            <div class="page__header-right">
                {actions.map(|actions| actions())}
            </div>
        </div>
    }
}
