use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge badge--primary",
        "success" => "badge badge--success",
        "warning" => "badge badge--warning",
        "error" => "badge badge--error",
        _ => "badge badge--neutral",
    };

    view! {
        <span class=variant_class>
            {children()}
        </span>
    }
}

/// Two-state badge for active/inactive style flags.
#[component]
pub fn FlagBadge(
    on: bool,
    #[prop(into)] on_label: String,
    #[prop(into)] off_label: String,
) -> impl IntoView {
    let (class, label) = if on {
        ("badge badge--success", on_label)
    } else {
        ("badge badge--neutral", off_label)
    };
    view! { <span class=class>{label}</span> }
}
