//! Supabase-specific implementation of the `TableStore` trait.
//!
//! Talks to the hosted store's PostgREST interface: equality filters are
//! encoded as `?column=eq.value`, ordering as `order=column.desc`, and the
//! API key travels in both the `apikey` header and a bearer token. Inserts
//! ask the store to echo the created representation back.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::errors::StoreError;
use crate::models::SelectQuery;
use crate::TableStore;

#[derive(Clone)]
pub struct SupabaseStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseStore {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Encodes a `SelectQuery` as PostgREST query parameters. Descending
    /// order sorts rows with a missing value last, so a row that never got a
    /// timestamp cannot shadow the real latest row.
    fn query_pairs(query: &SelectQuery) -> Vec<(String, String)> {
        let mut pairs = vec![(
            query.eq_column.clone(),
            format!("eq.{}", query.eq_value),
        )];
        if let Some(column) = &query.order_desc {
            pairs.push(("order".to_string(), format!("{column}.desc.nullslast")));
        }
        if let Some(limit) = query.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// The store may answer an insert with the created rows, a bare object,
    /// or an empty body depending on its `Prefer` handling.
    fn rows_from_body(body: &str) -> Result<Vec<Value>, StoreError> {
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let value: Value =
            serde_json::from_str(body).map_err(|err| StoreError::Decode(err.to_string()))?;
        match value {
            Value::Array(rows) => Ok(rows),
            Value::Null => Ok(Vec::new()),
            other => Ok(vec![other]),
        }
    }
}

#[async_trait]
impl TableStore for SupabaseStore {
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(table, "inserting row");
        let response = self
            .client
            .post(self.table_url(table))
            .header("apikey", &self.api_key)
            .header("Prefer", "return=representation")
            .bearer_auth(&self.api_key)
            .json(&row)
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Self::rows_from_body(&body)
    }

    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        tracing::debug!(table, filter = %query.eq_column, "selecting rows");
        let response = self
            .client
            .get(self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&Self::query_pairs(query))
            .send()
            .await?;
        let response = Self::check_status(response).await?;
        let body = response.text().await?;
        Self::rows_from_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn table_url_strips_trailing_slash() {
        let store = SupabaseStore::new("https://example.supabase.co/", "key");
        assert_eq!(
            store.table_url("students"),
            "https://example.supabase.co/rest/v1/students"
        );
    }

    #[test]
    fn query_pairs_encode_filter_order_and_limit() {
        let query = SelectQuery::eq("student_id", "s-1")
            .order_desc("created_at")
            .limit(10);
        assert_eq!(
            SupabaseStore::query_pairs(&query),
            vec![
                ("student_id".to_string(), "eq.s-1".to_string()),
                ("order".to_string(), "created_at.desc.nullslast".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn rows_from_body_handles_array_object_and_empty() {
        let rows = SupabaseStore::rows_from_body(r#"[{"id": 1}]"#).unwrap();
        assert_eq!(rows, vec![json!({"id": 1})]);

        let rows = SupabaseStore::rows_from_body(r#"{"id": 2}"#).unwrap();
        assert_eq!(rows, vec![json!({"id": 2})]);

        assert!(SupabaseStore::rows_from_body("").unwrap().is_empty());
        assert!(SupabaseStore::rows_from_body("null").unwrap().is_empty());
    }
}
