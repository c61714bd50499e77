//! Module for the plan and mastery read APIs.
//!
//! This module defines the public interface and structure for serving the
//! derived progress plan and the raw mastery scores.

pub mod handlers;
pub mod routes;
