// src/api/auth.rs
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "token";

#[derive(Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Store the raw session token in localStorage
pub fn set_token(token: &str) {
    LocalStorage::set(TOKEN_KEY, token)
        .expect("failed to write session token to localStorage");
}

/// Retrieve the raw token, empty string when none is stored
pub fn get_token() -> String {
    LocalStorage::get::<String>(TOKEN_KEY).ok().unwrap_or_default()
}

/// Remove the stored session token
pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Check if the user is currently authenticated (a token is present)
pub fn is_authenticated() -> bool {
    !get_token().is_empty()
}

/// Handle an API response status and clear a rejected session
pub fn handle_auth_error(status: u16) -> bool {
    if status == 401 || status == 403 {
        // Token rejected by the backend - drop it and start over at login
        clear_token();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
        true
    } else {
        false
    }
}

/// Logout by clearing the session and returning to the login page
pub fn logout() {
    clear_token();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}

/// Exchange credentials for a session token
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    let login_request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&crate::config_file::api_endpoint("/api/auth/login"))
        .header("Content-Type", "application/json")
        .json(&login_request)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.ok() {
        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        set_token(&token_response.token);
        Ok(token_response.token)
    } else {
        clear_token(); // Drop any stale token on failed login
        Err(format!("Login failed: {}", response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_serializes_both_fields() {
        let body = LoginRequest {
            username: "admin".into(),
            password: "secret123".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["username"], "admin");
        assert_eq!(value["password"], "secret123");
    }

    #[test]
    fn token_response_decodes() {
        let response: TokenResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(response.token, "abc123");
    }
}
