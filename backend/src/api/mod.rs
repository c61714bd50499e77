//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for the different API domains
//! (students, diagnostics, plans, activity logging) and assembles them into
//! the application router.

pub mod activity;
pub mod diagnostic;
pub mod plan;
pub mod student;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::middleware;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HomeResponse {
    status: &'static str,
}

async fn home() -> Json<HomeResponse> {
    Json(HomeResponse {
        status: "backend running with database",
    })
}

/// Builds the full application router with all routes and middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(home))
        .merge(student::routes::router())
        .merge(diagnostic::routes::router())
        .merge(plan::routes::router())
        .merge(activity::routes::router())
        .layer(middleware::cors())
        .with_state(state)
}
