use leptos::prelude::*;

use crate::shared::storage;

const LEFT_OPEN_KEY: &str = "layout_left_open";

/// Layout state shared by the shell components.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let left_open = storage::get(LEFT_OPEN_KEY).map_or(true, |v| v != "false");
        Self {
            left_open: RwSignal::new(left_open),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
        let open = self.left_open.get_untracked();
        storage::set(LEFT_OPEN_KEY, if open { "true" } else { "false" });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
