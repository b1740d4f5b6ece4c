//! Employee Module
//!
//! Defines the employee record held by the store.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an employee by the store.
pub type EmployeeId = i64;

// == Employee ==
/// A single employee record.
///
/// Absent fields in incoming JSON fall back to their zero values, so
/// `{"name": "Ann"}` binds with an empty position and a salary of `0.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Store-assigned identifier; ignored on create and update
    pub id: EmployeeId,
    /// Full name
    pub name: String,
    /// Job title
    pub position: String,
    /// Yearly salary
    pub salary: f64,
}

impl Employee {
    // == Constructor ==
    /// Creates an employee without an assigned id.
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: f64) -> Self {
        Self {
            id: 0,
            name: name.into(),
            position: position.into(),
            salary,
        }
    }

    // == With Id ==
    /// Returns the same record carrying the given id.
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = id;
        self
    }
}
