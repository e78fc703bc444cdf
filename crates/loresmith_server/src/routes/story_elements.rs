//! Story element endpoints.

use crate::{ApiError, ApiJson, ApiQuery, AppState, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use loresmith_core::{RefinementStage, StoryElement, StoryElementFilter};
use loresmith_generation::StoryElementRequest;
use loresmith_interface::StoryElementRepository;
use serde::Deserialize;
use std::str::FromStr;
use tracing::instrument;

/// `?tokenId=&stage=&limit=` filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryElementQuery {
    token_id: Option<String>,
    stage: Option<String>,
    limit: Option<u32>,
}

/// New stage label.
#[derive(Debug, Deserialize)]
pub struct StageUpdate {
    stage: String,
}

fn parse_stage(label: &str) -> Result<RefinementStage, ApiError> {
    RefinementStage::from_str(label).map_err(|_| {
        ApiError::bad_request(format!("Invalid request: unknown refinement stage '{label}'"))
    })
}

#[instrument(skip(state, request), fields(token_id = %request.token_id))]
pub async fn generate_story_element(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<StoryElementRequest>,
) -> Result<(StatusCode, Json<StoryElement>), ApiError> {
    let element = state
        .generator()
        .story_element(&request)
        .await
        .map_err(|e| ApiError::failed("generate story element", e))?;
    Ok((StatusCode::CREATED, Json(element)))
}

#[instrument(skip(state))]
pub async fn list_story_elements(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<StoryElementQuery>,
) -> Result<Json<Vec<StoryElement>>, ApiError> {
    let filter = StoryElementFilter {
        token_id: query.token_id,
        stage: query.stage.as_deref().map(parse_stage).transpose()?,
        limit: query.limit,
    };
    state
        .repo()
        .list_story_elements(&filter)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("list story elements", e))
}

#[instrument(skip(state))]
pub async fn get_story_element(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StoryElement>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .get_story_element(id)
        .await
        .map_err(|e| ApiError::failed("load story element", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Story element"))
}

#[instrument(skip(state))]
pub async fn set_stage(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<StageUpdate>,
) -> Result<Json<StoryElement>, ApiError> {
    let id = parse_id(&id)?;
    let stage = parse_stage(&update.stage)?;
    state
        .repo()
        .set_stage(id, stage)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("update story element", e))
}
