// src/api/customers.rs
use gloo::net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api::utils::{add_auth_header, check_status, get_json, parse_json};
use crate::config_file;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Serialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
}

/// Fetch all customers, newest first
pub async fn get_customers() -> Result<Vec<Customer>, String> {
    get_json("/api/customers", "customers").await
}

/// Create a customer and return the stored record
pub async fn create_customer(name: &str, email: &str) -> Result<Customer, String> {
    let body = CreateCustomerRequest {
        name: name.to_string(),
        email: email.to_string(),
    };

    let response = add_auth_header(Request::post(&config_file::api_endpoint("/api/customers")))
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to create request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_json(response, "create customer").await
}

/// Delete a customer by id
pub async fn delete_customer(id: i64) -> Result<(), String> {
    let url = config_file::api_endpoint(&format!("/api/customers/{}", id));

    let response = add_auth_header(Request::delete(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    check_status(response, "delete customer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_payload_decodes() {
        let json = r#"{
            "id": 1,
            "name": "Acme Corp",
            "email": "ops@acme.test",
            "created_at": "2024-05-01T12:00:00Z",
            "updated_at": "2024-05-02T08:30:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.id, 1);
        assert_eq!(customer.name, "Acme Corp");
        assert_eq!(customer.email, "ops@acme.test");
    }

    #[test]
    fn customer_list_payload_decodes() {
        let json = r#"[
            {"id": 2, "name": "B", "email": "b@b.test",
             "created_at": "2024-05-01T12:00:00Z", "updated_at": "2024-05-01T12:00:00Z"},
            {"id": 1, "name": "A", "email": "a@a.test",
             "created_at": "2024-04-01T12:00:00Z", "updated_at": "2024-04-01T12:00:00Z"}
        ]"#;
        let customers: Vec<Customer> = serde_json::from_str(json).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].id, 2);
    }

    #[test]
    fn create_request_serializes_expected_fields() {
        let body = CreateCustomerRequest {
            name: "Acme Corp".into(),
            email: "ops@acme.test".into(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["name"], "Acme Corp");
        assert_eq!(value["email"], "ops@acme.test");
    }
}
