//! API utilities for frontend-backend communication
//!
//! Every request carries the bearer token of the current session. Errors are
//! plain messages ready to be shown in a toast.

use std::cell::RefCell;

use contracts::shared::config::ApiConfig;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::system::auth::storage as auth_storage;

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

/// Installs the `[api]` section of the loaded configuration.
pub fn configure(api: &ApiConfig) {
    API_CONFIG.with(|cfg| *cfg.borrow_mut() = api.clone());
}

/// Configured `base_url`, or the page host on the configured port.
pub fn resolve_api_base(api: &ApiConfig, protocol: &str, hostname: &str) -> String {
    let configured = api.base_url.trim().trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Get the base URL for API requests, e.g. `http://localhost:3000`.
pub fn api_base() -> String {
    let api = API_CONFIG.with(|cfg| cfg.borrow().clone());
    let Some(window) = web_sys::window() else {
        return api.base_url;
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    resolve_api_base(&api, &protocol, &hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `http(s)://host` -> `ws(s)://host`
pub fn to_ws_url(http_url: &str) -> String {
    if let Some(rest) = http_url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = http_url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        http_url.to_string()
    }
}

pub fn ws_url(path: &str) -> String {
    to_ws_url(&api_url(path))
}

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

fn builder(verb: Verb, path: &str) -> RequestBuilder {
    let url = api_url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match auth_storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Picks `message` or `error` out of a JSON error body.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let detail = parsed.as_ref().and_then(|v| {
        v.get("message")
            .or_else(|| v.get("error"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
    });
    match (status, detail) {
        (_, Some(detail)) if !detail.trim().is_empty() => detail,
        (401, _) => "Session expired, please sign in again".to_string(),
        (403, _) => "You are not allowed to do that".to_string(),
        (404, _) => "Not found".to_string(),
        (status, _) => format!("Request failed: {}", status),
    }
}

async fn dispatch(verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<Response, String> {
    let builder = builder(verb, path);
    let response = match body {
        Some(body) => builder
            .json(&body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let message = error_message(status, &text);
    log::error!("{:?} {} -> {}: {}", verb, path, status, message);
    Err(message)
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, String> {
    serde_json::to_value(body).map_err(|e| format!("Failed to serialize request: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    parse(dispatch(Verb::Get, path, None).await?).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    parse(dispatch(Verb::Post, path, Some(to_body(body)?)).await?).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    parse(dispatch(Verb::Put, path, Some(to_body(body)?)).await?).await
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    parse(dispatch(Verb::Patch, path, Some(to_body(body)?)).await?).await
}

/// POST whose response body is not needed.
pub async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    dispatch(Verb::Post, path, Some(to_body(body)?)).await.map(|_| ())
}

pub async fn put<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    dispatch(Verb::Put, path, Some(to_body(body)?)).await.map(|_| ())
}

/// PATCH whose response body is not needed.
pub async fn patch_body<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    dispatch(Verb::Patch, path, Some(to_body(body)?)).await.map(|_| ())
}

/// Body-less PATCH, e.g. status toggles.
pub async fn patch(path: &str) -> Result<(), String> {
    dispatch(Verb::Patch, path, None).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    dispatch(Verb::Delete, path, None).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_base() {
        let api = ApiConfig::default();
        assert_eq!(
            resolve_api_base(&api, "https:", "shop.test"),
            "https://shop.test:3000"
        );
        let api = ApiConfig {
            base_url: "https://api.shop.test/".to_string(),
            port: 3000,
        };
        assert_eq!(resolve_api_base(&api, "http:", "x"), "https://api.shop.test");
    }

    #[test]
    fn test_to_ws_url() {
        assert_eq!(to_ws_url("http://localhost:3000/ws/orders"), "ws://localhost:3000/ws/orders");
        assert_eq!(to_ws_url("https://shop.test/ws"), "wss://shop.test/ws");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(error_message(400, r#"{"message":"SKU taken"}"#), "SKU taken");
        assert_eq!(error_message(422, r#"{"error":"bad email"}"#), "bad email");
        assert_eq!(error_message(401, ""), "Session expired, please sign in again");
        assert_eq!(error_message(500, "<html>"), "Request failed: 500");
    }
}
