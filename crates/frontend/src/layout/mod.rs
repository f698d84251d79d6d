pub mod global_context;
pub mod left;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    provide_context(global_context::AppGlobalContext::new());

    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <left::Left />
                <main data-zone="center" class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
