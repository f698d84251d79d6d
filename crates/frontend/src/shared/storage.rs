//! Browser `localStorage` accessor.
//!
//! All persisted client state (session, theme, cart) goes through these
//! functions; views never touch `window.localStorage` directly.

use serde::{de::DeserializeOwned, Serialize};
use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("localStorage rejected write of {key}");
        }
    }
}

pub fn clear(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Unreadable entries are removed and reported as absent.
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("discarding stored {key}: {e}");
            clear(key);
            None
        }
    }
}

pub fn set_json<T: Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set(key, &raw),
        Err(e) => log::error!("failed to serialize {key}: {e}"),
    }
}
