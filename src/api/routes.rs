//! API route configuration.

use crate::api::handlers::{classify_handler, domain_attributes_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Attribute API routes.
///
/// # Endpoints
///
/// - `GET  /domains`   - Registered domains with attributes (paginated)
/// - `POST /classify`  - Classify arbitrary names (batch-capable)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/domains", get(domain_attributes_list_handler))
        .route("/classify", post(classify_handler))
}
