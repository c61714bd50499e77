//! Handler functions for the diagnostic submission API.
//!
//! These functions take a batch of diagnostic answers and write them to the
//! remote store one row per answer.

use std::sync::Arc;

use adapters::models::DiagnosticAnswer;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DiagnosticSubmission {
    pub student_id: String,
    pub answers: Vec<DiagnosticAnswer>,
}

#[derive(Debug, Serialize)]
pub struct SubmitDiagnosticResponse {
    pub message: &'static str,
    pub status: &'static str,
}

/// POST /diagnostic/submit
///
/// Inserts answers sequentially with no transaction across rows; a failure
/// midway aborts the request and leaves the earlier rows in place.
pub async fn submit_diagnostic(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<DiagnosticSubmission>,
) -> Result<Json<SubmitDiagnosticResponse>, ApiError> {
    for answer in &submission.answers {
        state
            .store
            .insert(
                "diagnostic_answers",
                json!({
                    "student_id": submission.student_id,
                    "question_id": answer.question_id,
                    "answer": answer.answer,
                }),
            )
            .await?;
    }
    Ok(Json(SubmitDiagnosticResponse {
        message: "Diagnostic submitted successfully",
        status: "success",
    }))
}
