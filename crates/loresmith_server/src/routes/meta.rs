//! Liveness and vocabulary endpoints.

use axum::{Json, http::StatusCode, response::IntoResponse};
use loresmith_core::RefinementStage;
use serde::Serialize;
use serde_json::json;

/// One entry of the stage vocabulary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageInfo {
    stage: RefinementStage,
    position: usize,
    next: Option<RefinementStage>,
}

/// Health check endpoint.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Ordered refinement stages.
pub async fn list_stages() -> Json<Vec<StageInfo>> {
    Json(
        RefinementStage::ordered()
            .into_iter()
            .map(|stage| StageInfo {
                stage,
                position: stage.position(),
                next: stage.next(),
            })
            .collect(),
    )
}
