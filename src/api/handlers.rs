//! API Handlers
//!
//! HTTP request handlers for each employee server endpoint. Handlers parse
//! their inputs, call a single store operation and translate its outcome.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DeleteResponse, ListQuery, NotFoundResponse};
use crate::store::{Employee, EmployeeId, EmployeeStore, DEFAULT_PAGE_SIZE};

/// Application state shared across all handlers.
///
/// The store carries its own lock, so the state only holds a shared handle.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe employee store
    pub store: Arc<EmployeeStore>,
    /// Page size used when a list request omits one
    pub default_page_size: i64,
}

impl AppState {
    /// Creates a new AppState around the given store with default paging.
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            store: Arc::new(store),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Starts from an empty store with the default page size from the Config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(EmployeeStore::new()),
            default_page_size: config.default_page_size,
        }
    }
}

/// Parses the `:id` path segment.
fn parse_id(raw: &str) -> Result<EmployeeId> {
    raw.parse().map_err(|_| ApiError::InvalidId)
}

/// Decodes a JSON employee body, whatever content type the client declared.
fn parse_body(body: &Bytes) -> Result<Employee> {
    serde_json::from_slice(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

/// Handler for GET /employees
///
/// Returns one page of employees ordered by id.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Employee>> {
    let page = query.page_request(state.default_page_size);

    Json(state.store.list(page).await)
}

/// Handler for POST /employees
///
/// Stores a new employee and returns it with its assigned id.
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>)> {
    let employee = parse_body(&body)?;

    let id = state.store.create(employee.clone()).await;

    Ok((StatusCode::CREATED, Json(employee.with_id(id))))
}

/// Handler for GET /employees/:id
///
/// Retrieves a single employee.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>> {
    let id = parse_id(&id)?;

    state.store.get(id).await.map(Json).ok_or(ApiError::NotFound)
}

/// Handler for PUT /employees/:id
///
/// Replaces an existing employee, keeping its id.
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Employee>> {
    let id = parse_id(&id)?;
    let employee = parse_body(&body)?.with_id(id);

    if state.store.update(id, employee.clone()).await {
        Ok(Json(employee))
    } else {
        Err(ApiError::NotFound)
    }
}

/// Handler for DELETE /employees/:id
///
/// Deletes an employee.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let id = parse_id(&id)?;

    if state.store.delete(id).await {
        Ok(Json(DeleteResponse::new(id)))
    } else {
        Err(ApiError::NotFound)
    }
}

/// Fallback for any request that matches no route or method.
pub async fn not_found_handler() -> (StatusCode, Json<NotFoundResponse>) {
    (StatusCode::NOT_FOUND, Json(NotFoundResponse::new()))
}
