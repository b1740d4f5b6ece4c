//! Request and Response models for the employee server API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies. The
//! employee record itself lives in [`crate::store`].

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::ListQuery;
pub use responses::{DeleteResponse, NotFoundResponse};
