// src/api/accounts.rs
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api::utils::{add_auth_header, get_json, parse_json};
use crate::config_file;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Account {
    pub id: i64,
    pub customer_id: i64,
    pub name: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct CreateAccountRequest {
    pub customer_id: i64,
    pub name: String,
    pub status: String,
}

/// Fetch all accounts
pub async fn get_accounts() -> Result<Vec<Account>, String> {
    get_json("/api/accounts", "accounts").await
}

/// Create an account under a customer and return the stored record
pub async fn create_account(customer_id: i64, name: &str, status: &str) -> Result<Account, String> {
    let body = CreateAccountRequest {
        customer_id,
        name: name.to_string(),
        status: status.to_string(),
    };

    let response = add_auth_header(Request::post(&config_file::api_endpoint("/api/accounts")))
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_json(response, "create account").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_payload_decodes() {
        let json = r#"{
            "id": 7,
            "customer_id": 1,
            "name": "Checking",
            "status": "active",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-02T08:30:00Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.id, 7);
        assert_eq!(account.customer_id, 1);
        assert_eq!(account.status, "active");
    }

    #[test]
    fn create_request_serializes_expected_fields() {
        let body = CreateAccountRequest {
            customer_id: 1,
            name: "Savings".into(),
            status: "inactive".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["customer_id"], 1);
        assert_eq!(value["name"], "Savings");
        assert_eq!(value["status"], "inactive");
    }
}
