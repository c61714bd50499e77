//! Shared test utilities: an in-memory `TableStore` double and a test
//! server wired to it.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use adapters::errors::StoreError;
use adapters::models::SelectQuery;
use adapters::TableStore;
use async_trait::async_trait;
use axum_test::TestServer;
use backend::{api, AppState};
use serde_json::Value;

/// In-memory stand-in for the remote store. Honors equality filters,
/// descending order (missing values last) and limits, and can be told to
/// fail specific operations to exercise degradation paths.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    fail_inserts: Mutex<HashSet<String>>,
    fail_selects: Mutex<HashSet<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[allow(dead_code)]
    pub fn seed(&self, table: &str, rows: Vec<Value>) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .extend(rows);
    }

    #[allow(dead_code)]
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.tables
            .lock()
            .unwrap()
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Makes every insert into `table` fail with a store error.
    #[allow(dead_code)]
    pub fn fail_inserts_on(&self, table: &str) {
        self.fail_inserts.lock().unwrap().insert(table.to_string());
    }

    /// Makes selects against `table` filtered on `column` fail, as a real
    /// store does when the column does not exist.
    #[allow(dead_code)]
    pub fn fail_selects_on(&self, table: &str, column: &str) {
        self.fail_selects
            .lock()
            .unwrap()
            .insert((table.to_string(), column.to_string()));
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl TableStore for MemoryStore {
    async fn insert(&self, table: &str, row: Value) -> Result<Vec<Value>, StoreError> {
        if self.fail_inserts.lock().unwrap().contains(table) {
            return Err(StoreError::Status {
                status: 500,
                message: "insert rejected".to_string(),
            });
        }
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(vec![row])
    }

    async fn select(&self, table: &str, query: &SelectQuery) -> Result<Vec<Value>, StoreError> {
        let failing = self
            .fail_selects
            .lock()
            .unwrap()
            .contains(&(table.to_string(), query.eq_column.clone()));
        if failing {
            return Err(StoreError::Status {
                status: 400,
                message: format!("column {} does not exist", query.eq_column),
            });
        }

        let mut rows: Vec<Value> = self
            .rows(table)
            .into_iter()
            .filter(|row| {
                row.get(&query.eq_column)
                    .map(value_text)
                    .is_some_and(|v| v == query.eq_value)
            })
            .collect();

        if let Some(column) = &query.order_desc {
            rows.sort_by(|a, b| {
                let ka = a.get(column).and_then(Value::as_str);
                let kb = b.get(column).and_then(Value::as_str);
                match (ka, kb) {
                    (Some(a), Some(b)) => b.cmp(a),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            });
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

/// Spins up the full router over the given store double.
pub fn server(store: Arc<MemoryStore>) -> TestServer {
    let state = Arc::new(AppState::new(store));
    TestServer::new(api::router(state)).unwrap()
}
