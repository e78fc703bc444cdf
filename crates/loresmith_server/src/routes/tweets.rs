//! Tweet endpoints.

use super::backstories::TokenQuery;
use crate::{ApiError, ApiJson, ApiQuery, AppState, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use loresmith_core::Tweet;
use loresmith_generation::TweetRequest;
use loresmith_interface::TweetRepository;
use tracing::instrument;

#[instrument(skip(state, request), fields(token_id = %request.token_id))]
pub async fn generate_tweet(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<TweetRequest>,
) -> Result<(StatusCode, Json<Tweet>), ApiError> {
    let tweet = state
        .generator()
        .tweet(&request)
        .await
        .map_err(|e| ApiError::failed("generate tweet", e))?;
    Ok((StatusCode::CREATED, Json(tweet)))
}

#[instrument(skip(state))]
pub async fn list_tweets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TokenQuery>,
) -> Result<Json<Vec<Tweet>>, ApiError> {
    state
        .repo()
        .list_tweets(query.token_id.as_deref())
        .await
        .map(Json)
        .map_err(|e| ApiError::failed("list tweets", e))
}

#[instrument(skip(state))]
pub async fn get_tweet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Tweet>, ApiError> {
    let id = parse_id(&id)?;
    state
        .repo()
        .get_tweet(id)
        .await
        .map_err(|e| ApiError::failed("load tweet", e))?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Tweet"))
}
