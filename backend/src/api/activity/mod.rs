//! Module for the activity log API.
//!
//! This module defines the public interface and structure for appending
//! actions to a student's activity log and reading back the latest one.

pub mod handlers;
pub mod routes;
