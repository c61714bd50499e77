//! Handler functions for the plan and mastery APIs.
//!
//! These functions delegate to `services::progress` to compose the plan view
//! and coerce mastery rows, then format the responses.

use std::sync::Arc;

use adapters::models::MasteryScore;
use axum::extract::{Path, State};
use axum::Json;

use crate::errors::ApiError;
use crate::services::progress::{self, Plan};
use crate::state::AppState;

/// GET /plan/{student_id}
///
/// Always answers 200: each section of the plan degrades to its default when
/// its sub-fetch fails, so the frontend has a stable shape to render.
pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Json<Plan> {
    Json(progress::build_plan(state.store.as_ref(), &student_id).await)
}

/// GET /mastery/{student_id}
pub async fn get_mastery(
    State(state): State<Arc<AppState>>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<MasteryScore>>, ApiError> {
    let scores = progress::mastery_scores(state.store.as_ref(), &student_id).await?;
    Ok(Json(scores))
}
