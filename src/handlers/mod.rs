// src/handlers/mod.rs
pub mod admin;
pub mod banks;
pub mod certificates;
pub mod error;
pub mod tbill;
