pub mod sidebar;

use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
pub use sidebar::Sidebar;

#[component]
pub fn Left() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <aside data-zone="left" class="left" class:hidden=move || !ctx.left_open.get()>
            <Sidebar />
        </aside>
    }
}
