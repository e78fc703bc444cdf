//! Extractors that answer rejected input with the JSON error body.

use crate::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON body extractor whose rejection is a 400 [`ApiError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejection is a 400 [`ApiError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);
