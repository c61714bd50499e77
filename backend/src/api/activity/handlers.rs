//! Handler functions for the activity log API.
//!
//! These functions append entries to a student's activity log and serve the
//! most recent one, keeping the response shape stable for callers polling an
//! empty log.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::services::progress;
use crate::state::AppState;

/// All three fields are required; the request is rejected before any store
/// call when one is missing. `result` is free-form JSON.
#[derive(Debug, Deserialize)]
pub struct LogActionRequest {
    pub student_id: String,
    pub action: String,
    pub result: Value,
}

#[derive(Debug, Serialize)]
pub struct LogActionResponse {
    pub status: &'static str,
}

/// Stable placeholder for students whose log is still empty, so the caller
/// always gets an object with the same keys.
#[derive(Debug, Serialize)]
pub struct NoActionYet {
    pub action: Option<Value>,
    pub result: Option<Value>,
    pub student_id: String,
    pub message: &'static str,
}

/// Failure body for the latest-action endpoint. Unlike the generic error
/// shape it echoes the student identifier, which callers polling this
/// endpoint rely on to correlate responses.
#[derive(Debug, Serialize)]
pub struct LatestActionFailure {
    pub error: String,
    pub student_id: String,
    pub message: &'static str,
}

/// POST /log-action
pub async fn log_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LogActionRequest>,
) -> Result<Json<LogActionResponse>, ApiError> {
    state
        .store
        .insert(
            "activity_log",
            json!({
                "student_id": request.student_id,
                "action": request.action,
                "result": request.result,
            }),
        )
        .await?;
    Ok(Json(LogActionResponse {
        status: "Agent decision saved",
    }))
}

/// GET /latest-action/{student_id}
///
/// Returns the raw latest row (all store columns), or the placeholder when
/// the student has no entries yet. Store failures keep this endpoint's
/// richer error shape rather than the generic `{"error"}` body.
pub async fn get_latest_action(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Response {
    match progress::latest_action(state.store.as_ref(), &student_id).await {
        Ok(Some(row)) => Json(row).into_response(),
        Ok(None) => Json(NoActionYet {
            action: None,
            result: None,
            student_id,
            message: "No action found for this student yet. Please trigger the Relay workflow.",
        })
        .into_response(),
        Err(err) => {
            tracing::error!(%student_id, error = %err, "latest action fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(LatestActionFailure {
                    error: err.to_string(),
                    student_id,
                    message: "Failed to fetch latest action",
                }),
            )
                .into_response()
        }
    }
}
