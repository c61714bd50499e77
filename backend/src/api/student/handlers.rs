//! Handler functions for the student creation API.
//!
//! These functions validate the student payload shape, forward the insert to
//! the remote store, and format the acknowledgement for the frontend.

use std::sync::Arc;

use adapters::models::NewStudent;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CreateStudentResponse {
    pub message: &'static str,
    pub data: Vec<Value>,
}

/// POST /student
///
/// Inserts one row into the students table. The store usually echoes the
/// created row back; when it does not, the response still acknowledges the
/// save with an empty data list.
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(student): Json<NewStudent>,
) -> Result<Json<CreateStudentResponse>, ApiError> {
    let row = serde_json::to_value(&student)
        .map_err(|err| ApiError::Internal(err.to_string()))?;
    let data = state.store.insert("students", row).await?;
    let message = if data.is_empty() {
        "Student saved"
    } else {
        "Student saved to database"
    };
    Ok(Json(CreateStudentResponse { message, data }))
}
