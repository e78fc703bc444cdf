//! Backstory and name generation endpoints.

use crate::{ApiError, ApiJson, ApiQuery, AppState, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use loresmith_core::{Backstory, CharacterProfile};
use loresmith_generation::NamesRequest;
use loresmith_interface::BackstoryRepository;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// `?tokenId=` filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenQuery {
    pub(crate) token_id: Option<String>,
}

/// Generated names.
#[derive(Debug, Serialize)]
pub struct NamesResponse {
    names: Vec<String>,
}

#[instrument(skip(state, profile), fields(token_id = %profile.token_id))]
pub async fn generate_backstory(
    State(state): State<AppState>,
    ApiJson(profile): ApiJson<CharacterProfile>,
) -> Result<(StatusCode, Json<Backstory>), ApiError> {
    let backstory = state
        .generator()
        .backstory(&profile)
        .await
        .map_err(|e| ApiError::failed("generate backstory", e))?;
    Ok((StatusCode::CREATED, Json(backstory)))
}

#[instrument(skip(state))]
pub async fn list_backstories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<Vec<Backstory>>, ApiError> {
    state
        .repo()
        .list_backstories(query.token_id.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("list backstories", e))
}

#[instrument(skip(state))]
pub async fn get_backstory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Backstory>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .get_backstory(id)
        .await
        .map_err(|e| ApiError::failed("load backstory", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Backstory"))
}

#[instrument(skip(state))]
pub async fn active_backstory(
    State(state): State<AppState>,
    Path(token_id): Path<String>,
) -> Result<Json<Backstory>, ApiError> {
    state
        .repo()
        .active_backstory(&token_id)
        .await
        .map_err(|e| ApiError::failed("load backstory", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Backstory"))
}

#[instrument(skip(state))]
pub async fn activate_backstory(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Backstory>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .activate_backstory(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("activate backstory", e))
}

#[instrument(skip(state, request))]
pub async fn generate_names(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<NamesRequest>,
) -> Result<Json<NamesResponse>, ApiError> {
    let names = state
        .generator()
        .names(&request)
        .await
        .map_err(|e| ApiError::failed("generate names", e))?;
    Ok(Json(NamesResponse { names }))
}
