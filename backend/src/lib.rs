//! Empleados Backend Library
//!
//! CRUD REST service for employee records: HTTP handlers, business rules,
//! and SQLite persistence. The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
/// Application state management
///
/// Holds the service handles shared across requests.
pub mod state;
