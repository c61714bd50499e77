//! General-purpose middleware for the API.
//!
//! This module contains reusable middleware components (currently CORS) that
//! can be applied to different parts of the Axum router.

use tower_http::cors::{Any, CorsLayer};

/// Allow-everything CORS: the browser frontend is served from a different
/// origin than this backend.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
