// src/api/utils.rs
use gloo::console::error;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::auth;
use crate::config_file;

/// Attach the stored session token to a request
pub fn add_auth_header(request: RequestBuilder) -> RequestBuilder {
    request.header("Authorization", &format!("Bearer {}", auth::get_token()))
}

/// Decode a JSON response, funnelling rejected sessions through the auth
/// handler and logging everything else to the console.
pub async fn parse_json<T>(response: Response, operation_name: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    if auth::handle_auth_error(response.status()) {
        return Err("Authentication failed".to_string());
    }

    if !response.ok() {
        let error_msg = format!(
            "{} failed with status: {}",
            operation_name,
            response.status()
        );
        error!(&error_msg);
        return Err(error_msg);
    }

    response.json::<T>().await.map_err(|e| {
        let error_msg = format!("Failed to parse {} response: {:?}", operation_name, e);
        error!(&error_msg);
        error_msg
    })
}

/// Issue an authenticated GET against the API and decode the JSON payload
pub async fn get_json<T>(path: &str, operation_name: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let request = add_auth_header(Request::get(&config_file::api_endpoint(path)));

    let response = request.send().await.map_err(|e| {
        let error_msg = format!("{} request failed: {:?}", operation_name, e);
        error!(&error_msg);
        error_msg
    })?;

    parse_json(response, operation_name).await
}

/// Check a response from a call that returns no payload
pub fn check_status(response: Response, operation_name: &str) -> Result<(), String> {
    if auth::handle_auth_error(response.status()) {
        return Err("Authentication failed".to_string());
    }

    if response.ok() {
        Ok(())
    } else {
        let error_msg = format!(
            "{} failed with status: {}",
            operation_name,
            response.status()
        );
        error!(&error_msg);
        Err(error_msg)
    }
}
