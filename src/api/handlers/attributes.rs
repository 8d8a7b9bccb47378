//! Handlers for attribute classification and listing.

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::attributes::{
    AttributesItem, ClassifyRequest, ClassifyResponse, DomainAttributesListResponse,
    PaginationMeta,
};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Classifies arbitrary names without checking registration.
///
/// # Endpoint
///
/// `POST /api/classify`
///
/// # Request Body
///
/// ```json
/// { "names": ["9999.x", "WEFff.x"] }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "items": [
///     {
///       "name": "9999.x",
///       "label": "9999",
///       "suffix": "x",
///       "length": 4,
///       "number_club": "10k Club",
///       "character_set": "digit"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty, holds more than 100 names,
/// or contains an empty or oversized name.
pub async fn classify_handler(
    State(state): State<AppState>,
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    payload.validate()?;

    let items = state
        .attribute_service
        .classify_batch(payload.names.as_slice())
        .into_iter()
        .map(AttributesItem::from)
        .collect();

    Ok(Json(ClassifyResponse { items }))
}

/// Lists registered domains with their attributes.
///
/// # Endpoint
///
/// `GET /api/domains`
///
/// # Query Parameters
///
/// - `limit` (optional): Items to return (default: 20, range: 1-100)
/// - `offset` (optional): Items to skip (default: 0)
///
/// # Errors
///
/// Returns 400 Bad Request if `limit` or `offset` is out of range.
pub async fn domain_attributes_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<DomainAttributesListResponse>, AppError> {
    let limit = params.limit();
    let offset = params.offset();

    let service = &state.attribute_service;
    let (attributes, total_items) = tokio::try_join!(
        service.list_attributes(limit, offset),
        service.registered_count()
    )?;

    Ok(Json(DomainAttributesListResponse {
        pagination: PaginationMeta {
            limit,
            offset,
            total_items,
        },
        items: attributes.into_iter().map(AttributesItem::from).collect(),
    }))
}
