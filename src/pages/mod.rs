pub mod accounts;
pub mod analytics;
pub mod customers;
pub mod dashboard;
pub mod login;
