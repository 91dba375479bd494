// src/api/analytics.rs
use serde::Deserialize;

use crate::api::utils::get_json;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsSummary {
    pub total_customers: i64,
    pub total_accounts: i64,
    pub active_accounts: i64,
    pub inactive_accounts: i64,
    pub avg_accounts_per_customer: f64,
}

/// Fetch the portfolio-wide analytics summary
pub async fn get_analytics() -> Result<AnalyticsSummary, String> {
    get_json("/api/analytics", "analytics").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_payload_decodes() {
        let json = r#"{
            "total_customers": 12,
            "total_accounts": 30,
            "active_accounts": 25,
            "inactive_accounts": 5,
            "avg_accounts_per_customer": 2.5
        }"#;
        let summary: AnalyticsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_customers, 12);
        assert_eq!(summary.inactive_accounts, 5);
        assert!((summary.avg_accounts_per_customer - 2.5).abs() < f64::EPSILON);
    }
}
