//! Defines the HTTP routes for diagnostic submission.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::submit_diagnostic;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/diagnostic/submit", post(submit_diagnostic))
}
