//! Store Module
//!
//! Provides the in-memory employee collection with id assignment and pagination.

mod employee;
mod employee_store;
mod pagination;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use employee::{Employee, EmployeeId};
pub use employee_store::EmployeeStore;
pub use pagination::PageRequest;

// == Public Constants ==
/// Page number used when the client does not supply one
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not supply one
pub const DEFAULT_PAGE_SIZE: i64 = 10;
