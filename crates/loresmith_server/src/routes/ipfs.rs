//! Metadata pinning endpoint.

use crate::{ApiError, ApiJson, AppState};
use axum::{Json, extract::State};
use loresmith_interface::PinnedContent;
use loresmith_ipfs::{MetadataRequest, pin_token_metadata};
use tracing::{error, instrument};

#[instrument(skip(state, request), fields(token_id = %request.token_id))]
pub async fn pin_metadata(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<MetadataRequest>,
) -> Result<Json<PinnedContent>, ApiError> {
    let Some(pinner) = state.pinner() else {
        error!("PINATA_JWT is not configured");
        return Err(ApiError::new(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to pin metadata",
        ));
    };
    pin_token_metadata(state.repo(), pinner, &request)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("pin metadata", e))
}
