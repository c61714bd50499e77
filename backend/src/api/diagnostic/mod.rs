//! Module for the diagnostic submission API.
//!
//! This module defines the public interface and structure for recording a
//! student's diagnostic answers.

pub mod handlers;
pub mod routes;
