//! API Routes
//!
//! Configures the Axum router with all employee server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use super::handlers::{
    create_handler, delete_handler, get_handler, list_handler, not_found_handler,
    update_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /employees` - List a page of employees
/// - `POST /employees` - Create an employee
/// - `GET /employees/:id` - Retrieve an employee
/// - `PUT /employees/:id` - Replace an employee
/// - `DELETE /employees/:id` - Delete an employee
///
/// Unknown paths and unsupported methods on known paths answer 404.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs method and path of every request at INFO
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route(
            "/employees",
            get(list_handler)
                .post(create_handler)
                .fallback(not_found_handler),
        )
        .route(
            "/employees/:id",
            get(get_handler)
                .put(update_handler)
                .delete(delete_handler)
                .fallback(not_found_handler),
        )
        .fallback(not_found_handler)
        .layer(cors)
        .layer(trace)
        .with_state(state)
}
