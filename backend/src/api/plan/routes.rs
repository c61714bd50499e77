//! Defines the HTTP routes for the plan and mastery views.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{get_mastery, get_plan};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/plan/:student_id", get(get_plan))
        .route("/mastery/:student_id", get(get_mastery))
}
