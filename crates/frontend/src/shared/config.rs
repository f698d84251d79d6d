//! Runtime configuration: the embedded defaults, optionally overridden by a
//! `config.toml` served next to the bundle.

use contracts::shared::config::{load_config, AppConfig};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api_utils;

const CONFIG_URL: &str = "/config.toml";

#[derive(Clone, Copy)]
pub struct ConfigContext(pub RwSignal<AppConfig>);

async fn fetch_override() -> Result<Option<String>, String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Request failed: {}", response.status()));
    }
    response
        .text()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to read response: {}", e))
}

#[component]
pub fn ConfigProvider(children: Children) -> impl IntoView {
    let defaults = load_config(None).unwrap_or_else(|e| {
        log::error!("embedded configuration is invalid: {e}");
        AppConfig::default()
    });
    api_utils::configure(&defaults.api);
    let config = RwSignal::new(defaults);

    spawn_local(async move {
        match fetch_override().await {
            Ok(Some(text)) => match load_config(Some(&text)) {
                Ok(loaded) => {
                    log::info!("loaded {CONFIG_URL}");
                    api_utils::configure(&loaded.api);
                    config.set(loaded);
                }
                Err(e) => log::error!("ignoring {CONFIG_URL}: {e:#}"),
            },
            Ok(None) => log::debug!("no {CONFIG_URL}, using defaults"),
            Err(e) => log::warn!("could not fetch {CONFIG_URL}: {e}"),
        }
    });

    provide_context(ConfigContext(config));
    children()
}

pub fn use_config() -> RwSignal<AppConfig> {
    use_context::<ConfigContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| RwSignal::new(AppConfig::default()))
}
