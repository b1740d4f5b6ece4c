//! Employee API - An in-memory employee CRUD server
//!
//! Stores employee records behind a single reader/writer lock and serves
//! them over HTTP with paginated listing.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use store::{Employee, EmployeeStore};
