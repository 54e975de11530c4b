// src/services/mod.rs
pub mod admin_auth;
pub mod bank_store;
pub mod calculations;
pub mod certificates;
pub mod treasury;
