//! Core `adapters` crate for abstracting access to the hosted tabular store.
//!
//! This crate defines the `TableStore` trait, which outlines the generic
//! insert/select operations the backend needs, and provides the concrete
//! Supabase implementation used in production.

pub mod errors;
pub mod models;
pub mod supabase;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::models::SelectQuery;

pub use supabase::SupabaseStore;

/// Generic interface to the remote tabular store.
///
/// All filtering is exact-match equality on a single column; composition of
/// richer views happens in the backend services. Implementations must be
/// usable behind an `Arc` from concurrent request handlers.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Inserts one row into `table` and returns the inserted row(s) as
    /// reported by the store, which may be empty if the store does not echo
    /// a representation back.
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError>;

    /// Selects rows from `table` matching `query`.
    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError>;
}
