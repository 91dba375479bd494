use gloo::console::error;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FrontendConfig {
    pub api_url: String,
}

const API_URL: &str = "api_url";

/// Fetch `/config/config.json` and cache its values in localStorage.
/// A missing or unreadable config is not fatal: API requests then use
/// same-origin relative URLs.
pub async fn load_config() {
    let response = match Request::get("/config/config.json").send().await {
        Ok(response) if response.ok() => response,
        _ => return,
    };

    match response.json::<FrontendConfig>().await {
        Ok(config) => {
            if LocalStorage::set(API_URL, config.api_url).is_err() {
                error!("failed to write api_url to localStorage");
            }
        }
        Err(e) => error!(format!("Failed to parse config.json: {:?}", e)),
    }
}

/// Base URL of the backend API, empty when serving same-origin
pub fn api_url() -> String {
    LocalStorage::get(API_URL).ok().unwrap_or_default()
}

/// Join the configured API base with an absolute request path
pub fn api_endpoint(path: &str) -> String {
    format!("{}{}", api_url(), path)
}
