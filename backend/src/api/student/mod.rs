//! Module for the student creation API.
//!
//! This module defines the public interface and structure for registering
//! new students in the remote store.

pub mod handlers;
pub mod routes;
