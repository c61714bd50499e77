//! Generic data models for the `adapters` crate.
//!
//! These models define the rows the backend reads from and writes to the
//! store (students, diagnostic answers, activity log entries, mastery
//! scores) together with the select-query description shared by all
//! `TableStore` implementations, so backend services interact with a
//! consistent data format.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for creating a student. `daily_time` is minutes per day and must
/// arrive as a JSON integer; any other shape is rejected at deserialization.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub class_level: String,
    pub subject: String,
    pub goal: String,
    pub language: String,
    pub daily_time: i64,
}

/// One answer from a diagnostic submission.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DiagnosticAnswer {
    pub question_id: String,
    pub answer: String,
}

/// An append-only activity log row.
///
/// `result` is free-form JSON: either a plain string task description or an
/// object carrying `topic`/`task` fields. Some deployments also keep a
/// `topic` column directly on the row. Unknown extra columns are ignored.
#[derive(Debug, Clone)]
pub struct ActivityLogEntry {
    pub student_id: Option<String>,
    pub action: Option<String>,
    pub result: Option<Value>,
    pub topic: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl ActivityLogEntry {
    /// Parses a raw store row. Fields are read individually so one
    /// malformed column cannot erase the others: a timestamp the store
    /// emits without a UTC offset (a plain `timestamp` column) still leaves
    /// `action` and `result` intact.
    pub fn from_row(row: &Value) -> Self {
        let text = |key: &str| row.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            student_id: text("student_id"),
            action: text("action"),
            result: row.get("result").filter(|v| !v.is_null()).cloned(),
            topic: text("topic"),
            created_at: row
                .get("created_at")
                .and_then(Value::as_str)
                .and_then(parse_timestamp),
        }
    }
}

/// Accepts RFC 3339 timestamps as well as the offsetless form PostgREST
/// emits for plain `timestamp` columns; the latter is taken as UTC.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc()))
}

/// A mastery score row, with the loose typing of the store coerced into a
/// fixed shape for the frontend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MasteryScore {
    pub topic: String,
    pub score: i64,
}

impl MasteryScore {
    /// Builds a score from a raw row. Missing topics become "Unknown";
    /// scores arrive as numbers or numeric strings and default to 0 when
    /// absent or unparseable.
    pub fn from_row(row: &Value) -> Self {
        let topic = row
            .get("topic")
            .and_then(Value::as_str)
            .unwrap_or("Unknown")
            .to_string();
        let score = match row.get("score") {
            Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .unwrap_or(0);
        Self { topic, score }
    }
}

/// Exact-match select against one table: a single equality filter with an
/// optional row limit and optional descending order on one column.
#[derive(Debug, Clone)]
pub struct SelectQuery {
    pub eq_column: String,
    pub eq_value: String,
    pub limit: Option<u32>,
    pub order_desc: Option<String>,
}

impl SelectQuery {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            eq_column: column.into(),
            eq_value: value.into(),
            limit: None,
            order_desc: None,
        }
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Orders results by `column`, newest first, rows without a value last.
    pub fn order_desc(mut self, column: impl Into<String>) -> Self {
        self.order_desc = Some(column.into());
        self
    }
}
