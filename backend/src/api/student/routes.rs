//! Defines the HTTP routes for student creation.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::create_student;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/student", post(create_student))
}
