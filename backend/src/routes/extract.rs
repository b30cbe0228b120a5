//! Request extractors

use crate::error::ApiError;
use axum::extract::FromRequest;

/// JSON body extractor whose rejections use the API error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
