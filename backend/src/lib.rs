//! Student progress backend: a stateless HTTP facade over a hosted tabular
//! store.
//!
//! The library exposes the router and shared state so integration tests can
//! run the full HTTP surface against a store double; `main.rs` wires the
//! same pieces to the real Supabase client.

pub mod api;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod state;

pub use api::router;
pub use config::Config;
pub use errors::ApiError;
pub use state::AppState;
