//! API Module
//!
//! HTTP handlers and routing for the employee server REST API.
//!
//! # Endpoints
//! - `GET /employees?page=&pageSize=` - List a page of employees
//! - `POST /employees` - Create an employee
//! - `GET /employees/:id` - Retrieve an employee
//! - `PUT /employees/:id` - Replace an employee
//! - `DELETE /employees/:id` - Delete an employee

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
