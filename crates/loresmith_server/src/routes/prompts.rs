//! Prompt administration endpoints.

use crate::{ApiError, ApiJson, ApiQuery, AppState, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use loresmith_core::{NewPrompt, Prompt, PromptUpdate};
use loresmith_generation::{TemplateVars, render, render_template, resolve};
use loresmith_interface::PromptRepository;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// `?type=` filter for listing prompts.
#[derive(Debug, Default, Deserialize)]
pub struct PromptQuery {
    #[serde(rename = "type")]
    prompt_type: Option<String>,
}

/// Render a stored prompt or an ad-hoc template without calling the model.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRequest {
    /// Render the active prompt of this type
    #[serde(default, rename = "type")]
    prompt_type: Option<String>,
    /// Render this template instead of a stored one
    #[serde(default)]
    content_template: Option<String>,
    /// System context for an ad-hoc template
    #[serde(default)]
    system_context: Option<String>,
    /// Placeholder values
    #[serde(default)]
    variables: TemplateVars,
}

/// Preview output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    prompt_version: Option<i32>,
    system: String,
    user: String,
}

#[instrument(skip(state))]
pub async fn list_prompts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PromptQuery>,
) -> Result<Json<Vec<Prompt>>, ApiError> {
    state
        .repo()
        .list_prompts(query.prompt_type.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("list prompts", e))
}

#[instrument(skip(state, new_prompt), fields(prompt_type = %new_prompt.prompt_type))]
pub async fn create_prompt(
    State(state): State<AppState>,
    ApiJson(new_prompt): ApiJson<NewPrompt>,
) -> Result<(StatusCode, Json<Prompt>), ApiError> {
    if new_prompt.prompt_type.trim().is_empty() {
        return Err(ApiError::bad_request("Invalid request: type must not be empty"));
    }
    let prompt = state
        .repo()
        .create_prompt(new_prompt)
        .await
        .map_err(|e| ApiError::failed("create prompt", e))?;
    Ok((StatusCode::CREATED, Json(prompt)))
}

#[instrument(skip(state))]
pub async fn active_prompt(
    State(state): State<AppState>,
    Path(prompt_type): Path<String>,
) -> Result<Json<Prompt>, ApiError> {
    resolve(state.repo(), &prompt_type)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("resolve prompt", e))
}

#[instrument(skip(state))]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Prompt>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .get_prompt(id)
        .await
        .map_err(|e| ApiError::failed("load prompt", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Prompt"))
}

#[instrument(skip(state, update))]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(update): ApiJson<PromptUpdate>,
) -> Result<Json<Prompt>, ApiError> {
    let id = parse_id(&id)?;
    if update.is_empty() {
        return Err(ApiError::bad_request("Invalid request: nothing to update"));
    }
    state
        .repo()
        .update_prompt(id, update)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("update prompt", e))
}

#[instrument(skip(state))]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    let deleted = state
        .repo()
        .delete_prompt(id)
        .await
        .map_err(|e| ApiError::failed("delete prompt", e))?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Prompt"))
    }
}

#[instrument(skip(state))]
pub async fn activate_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Prompt>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .activate_prompt(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("activate prompt", e))
}

#[instrument(skip(state, request))]
pub async fn preview_prompt(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<PreviewRequest>,
) -> Result<Json<PreviewResponse>, ApiError> {
    if let Some(template) = request.content_template {
        return Ok(Json(PreviewResponse {
            prompt_version: None,
            system: request.system_context.unwrap_or_default(),
            user: render_template(&template, &request.variables),
        }));
    }

    let Some(prompt_type) = request.prompt_type else {
        return Err(ApiError::bad_request(
            "Invalid request: either type or contentTemplate is required",
        ));
    };
    let prompt = resolve(state.repo(), &prompt_type)
        .await
        .map_err(|e| ApiError::failed("resolve prompt", e))?;
    let rendered = render(&prompt, &request.variables);
    Ok(Json(PreviewResponse {
        prompt_version: Some(rendered.prompt_version),
        system: rendered.system,
        user: rendered.user,
    }))
}
