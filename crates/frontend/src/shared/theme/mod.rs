//! Theme management: light/dark mode plus the brand color palette.
//!
//! Both are persisted through `shared::storage` and applied on startup. The
//! palette is refreshed from the backend's active theme once the app loads.

pub mod color_editor;

use contracts::domain::a006_theme::aggregate::{ThemeConfig, ThemeDraft};
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::shared::{api_utils, storage};

pub use color_editor::ColorEditor;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-theme";
const PALETTE_STORAGE_KEY: &str = "app-palette";

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Writes the palette as CSS custom properties on `<html>`.
pub fn apply_palette(palette: &ThemeDraft) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };
    let style = root.style();
    for (name, value) in palette.css_variables() {
        if style.set_property(name, value).is_err() {
            log::warn!("could not set {name}");
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    pub palette: RwSignal<ThemeDraft>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }

    /// Applies and persists a palette.
    pub fn set_palette(&self, palette: ThemeDraft) {
        apply_palette(&palette);
        storage::set_json(PALETTE_STORAGE_KEY, &palette);
        self.palette.set(palette);
    }

    /// Applies a palette without keeping it (live editor preview).
    pub fn preview(&self, palette: &ThemeDraft) {
        apply_palette(palette);
    }

    /// Drops any preview and re-applies the stored palette.
    pub fn restore(&self) {
        self.palette.with_untracked(apply_palette);
    }
}

async fn fetch_active_palette() -> Result<ThemeDraft, String> {
    let path = format!("/api/{}/active", ThemeConfig::COLLECTION);
    let theme: ThemeConfig = api_utils::get_json(&path).await?;
    Ok(theme.to_draft())
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let initial_theme = storage::get(THEME_STORAGE_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default();
    let initial_palette = storage::get_json::<ThemeDraft>(PALETTE_STORAGE_KEY).unwrap_or_default();
    apply_theme(initial_theme);
    apply_palette(&initial_palette);

    let context = ThemeContext {
        theme: RwSignal::new(initial_theme),
        palette: RwSignal::new(initial_palette),
    };
    provide_context(context);

    spawn_local(async move {
        match fetch_active_palette().await {
            Ok(palette) => {
                if context.palette.with_untracked(|p| *p != palette) {
                    context.set_palette(palette);
                }
            }
            Err(e) => log::debug!("no active theme from backend: {e}"),
        }
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Light/dark switch for the top bar.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header-icon-btn"
            on:click=move |_| ctx.toggle()
            title=move || format!("Switch to {} theme", ctx.theme.get().toggled().display_name().to_lowercase())
        >
            {crate::shared::icons::icon("palette")}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("forest"), Theme::Light);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
