// src/api/handlers.rs
// HTTP handlers for the classification endpoints

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::api::error::{ApiError, ApiResult};
use crate::api::types::AnalyzeTextRequest;
use crate::classifier::ClassificationResult;
use crate::extract::extract_upload;
use crate::state::AppState;

/// Health check handler
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "model": state.config.model,
        "model_configured": state.classifier.has_model(),
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Classify raw email text and suggest a reply.
pub async fn analyze_text_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeTextRequest>,
) -> Json<ClassificationResult> {
    Json(state.classifier.classify(&payload.text).await)
}

/// Classify an uploaded .txt or .pdf email file.
pub async fn analyze_file_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<ClassificationResult>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field.content_type().map(|ct| ct.to_string());
        let bytes = field.bytes().await.map_err(multipart_error)?;

        let text = extract_upload(&filename, content_type.as_deref(), &bytes)?;
        return Ok(Json(state.classifier.classify(&text).await));
    }

    Err(ApiError::bad_request("Missing file field in form data."))
}

// Keeps the multipart status (413 on body-limit violations, 400 otherwise).
fn multipart_error(err: MultipartError) -> ApiError {
    ApiError {
        message: err.body_text(),
        status_code: err.status(),
        error_code: None,
    }
}
