//! Handler for the public NFT metadata endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::metadata::MetadataResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata attributes for a registered domain.
///
/// # Endpoint
///
/// `GET /metadata/{name}`
///
/// # Response
///
/// ```json
/// {
///   "name": "202.crypto",
///   "attributes": [
///     { "trait_type": "Ending", "value": "crypto" },
///     { "trait_type": "Length", "value": 3, "display_type": "number" },
///     { "trait_type": "Character Set", "value": "digit" },
///     { "trait_type": "Number Club", "value": "999 Club" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the domain is not registered.
pub async fn metadata_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MetadataResponse>, AppError> {
    let attributes = state.attribute_service.metadata_for(&name).await?;

    Ok(Json(attributes.into()))
}
