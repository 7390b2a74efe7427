use serde::Deserialize;
use std::sync::OnceLock;

use crate::utils::storage;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_string(global: &str, keys: &[&str]) -> Option<String> {
    let w = storage::window().ok()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// First candidate that is set and not blank, normalized. Candidates are in priority order.
fn first_configured<I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|candidate| normalize_base_url(&candidate))
        .find(|candidate| !candidate.is_empty())
}

// window.__PAYROLL_ENV = { API_BASE_URL: "..." } (env.js) wins over
// window.__PAYROLL_CONFIG = { api_base_url: "..." }.
fn snapshot_from_globals() -> Option<String> {
    first_configured([
        read_global_string("__PAYROLL_ENV", &["API_BASE_URL", "api_base_url"]),
        read_global_string("__PAYROLL_CONFIG", &["api_base_url", "API_BASE_URL"]),
    ])
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Ok(w) = storage::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__PAYROLL_CONFIG".into(), &obj);
}

fn config_json_url() -> Option<String> {
    let origin = storage::window().ok()?.location().origin().ok()?;
    Some(format!("{}/config.json", origin))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let url = config_json_url()?;
    let resp = reqwest::Client::new().get(url).send().await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    let fetched = fetch_runtime_config().await;
    if let Some(cfg) = &fetched {
        write_window_config(cfg);
    }
    match first_configured([fetched.and_then(|cfg| cfg.api_base_url)]) {
        Some(url) => cache_base_url(&url),
        None => {
            log::debug!("No runtime API base URL configured, using {}", DEFAULT_API_BASE_URL);
            cache_base_url(DEFAULT_API_BASE_URL)
        }
    }
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
