//! Defines the HTTP routes for activity logging.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_latest_action, log_action};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/log-action", post(log_action))
        .route("/latest-action/:student_id", get(get_latest_action))
}
