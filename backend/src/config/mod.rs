//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the store URL, the store API key, and the listen address, all read from
//! the environment once at startup.

use std::env;

use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Runtime configuration, resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted store, e.g. `https://xyz.supabase.co`.
    pub store_url: String,
    /// API key sent with every store request.
    pub store_key: String,
    /// Address the HTTP server binds to.
    pub listen_addr: String,
}

impl Config {
    /// Loads configuration, failing fast when the store credentials are
    /// absent. `LISTEN_ADDR` is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_url =
            env::var("SUPABASE_URL").map_err(|_| ConfigError::MissingVar("SUPABASE_URL"))?;
        let store_key =
            env::var("SUPABASE_KEY").map_err(|_| ConfigError::MissingVar("SUPABASE_KEY"))?;
        let listen_addr =
            env::var("LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());
        Ok(Self {
            store_url,
            store_key,
            listen_addr,
        })
    }
}
