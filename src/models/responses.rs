//! Response DTOs for the employee server API
//!
//! Defines the structure of outgoing HTTP response bodies. Employee records
//! are serialized directly.

use serde::Serialize;

use crate::store::EmployeeId;

/// Response body for the DELETE operation (DELETE /employees/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Confirmation message
    pub message: String,
    /// The id that was deleted
    pub id: EmployeeId,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: EmployeeId) -> Self {
        Self {
            message: "employee deleted".to_string(),
            id,
        }
    }
}

/// Response body for requests that match no route
#[derive(Debug, Clone, Serialize)]
pub struct NotFoundResponse {
    /// HTTP status code, always 404
    pub status: u16,
    /// Generic error text
    pub error: String,
}

impl NotFoundResponse {
    /// Creates the generic not-found body
    pub fn new() -> Self {
        Self {
            status: 404,
            error: "Not Found".to_string(),
        }
    }
}

impl Default for NotFoundResponse {
    fn default() -> Self {
        Self::new()
    }
}
