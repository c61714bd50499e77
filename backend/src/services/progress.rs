//! Composes a student's progress view from the remote store.
//!
//! Every function here takes the store through the `TableStore` trait and
//! filters by student identifier; richer composition (the plan) happens
//! client-side because the store offers no joins. The plan builder degrades
//! section by section: a failed sub-fetch logs a warning and falls back to a
//! default instead of aborting the whole response.

use adapters::errors::StoreError;
use adapters::models::{ActivityLogEntry, MasteryScore, SelectQuery};
use adapters::TableStore;
use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_TOPIC: &str = "Not assigned yet";
pub const DEFAULT_TASK: &str = "No task assigned yet";
pub const DEFAULT_ACTION: &str = "PENDING";

const STUDENTS_TABLE: &str = "students";
const ACTIVITY_TABLE: &str = "activity_log";
const MASTERY_TABLE: &str = "mastery";

/// How many history lines the plan view shows.
const ACTIVITY_HISTORY_LIMIT: u32 = 10;

/// The derived view the frontend renders: the student row, the focus
/// extracted from the latest logged action, mastery scores, and recent
/// activity as display strings.
#[derive(Debug, Serialize)]
pub struct Plan {
    pub student: Option<Value>,
    pub current_topic: String,
    pub action: String,
    pub task: String,
    pub mastery: Vec<MasteryScore>,
    pub activity: Vec<String>,
}

/// Looks up the student row by the `id` column, retrying once against
/// `student_id` when the first select errors. Which column is canonical
/// varies between deployments; both are tolerated here on purpose.
pub async fn find_student(store: &dyn TableStore, student_id: &str) -> Option<Value> {
    match store
        .select(STUDENTS_TABLE, &SelectQuery::eq("id", student_id))
        .await
    {
        Ok(rows) => rows.into_iter().next(),
        Err(err) => {
            tracing::warn!(%student_id, error = %err, "student lookup by id failed, retrying by student_id");
            match store
                .select(STUDENTS_TABLE, &SelectQuery::eq("student_id", student_id))
                .await
            {
                Ok(rows) => rows.into_iter().next(),
                Err(err) => {
                    tracing::warn!(%student_id, error = %err, "student lookup by student_id failed");
                    None
                }
            }
        }
    }
}

/// Returns the most recent activity row for a student, or `None` when the
/// log is empty. Ordering is delegated to the store (descending by
/// `created_at`, one row) rather than fetched and sorted here.
pub async fn latest_action(
    store: &dyn TableStore,
    student_id: &str,
) -> Result<Option<Value>, StoreError> {
    let rows = store
        .select(
            ACTIVITY_TABLE,
            &SelectQuery::eq("student_id", student_id)
                .order_desc("created_at")
                .limit(1),
        )
        .await?;
    Ok(rows.into_iter().next())
}

/// Fetches all mastery rows for a student, coercing each into the fixed
/// topic/score shape.
pub async fn mastery_scores(
    store: &dyn TableStore,
    student_id: &str,
) -> Result<Vec<MasteryScore>, StoreError> {
    let rows = store
        .select(MASTERY_TABLE, &SelectQuery::eq("student_id", student_id))
        .await?;
    Ok(rows.iter().map(MasteryScore::from_row).collect())
}

/// Fetches the most recent activity rows and formats them as display lines,
/// newest first.
pub async fn recent_activity(
    store: &dyn TableStore,
    student_id: &str,
) -> Result<Vec<String>, StoreError> {
    let rows = store
        .select(
            ACTIVITY_TABLE,
            &SelectQuery::eq("student_id", student_id)
                .order_desc("created_at")
                .limit(ACTIVITY_HISTORY_LIMIT),
        )
        .await?;
    Ok(rows
        .iter()
        .map(|row| activity_line(&ActivityLogEntry::from_row(row)))
        .collect())
}

/// Builds the composite plan. Each sub-fetch is independent: a failure in
/// one section degrades that section to its default and leaves the rest of
/// the response intact.
pub async fn build_plan(store: &dyn TableStore, student_id: &str) -> Plan {
    let student = find_student(store, student_id).await;

    let latest = match latest_action(store, student_id).await {
        Ok(latest) => latest.map(|row| ActivityLogEntry::from_row(&row)),
        Err(err) => {
            tracing::warn!(%student_id, error = %err, "latest action fetch failed");
            None
        }
    };

    let mastery = match mastery_scores(store, student_id).await {
        Ok(mastery) => mastery,
        Err(err) => {
            tracing::warn!(%student_id, error = %err, "mastery fetch failed");
            Vec::new()
        }
    };

    let activity = match recent_activity(store, student_id).await {
        Ok(activity) => activity,
        Err(err) => {
            tracing::warn!(%student_id, error = %err, "activity fetch failed");
            Vec::new()
        }
    };

    let (current_topic, task) = latest
        .as_ref()
        .map(derive_focus)
        .unwrap_or((DEFAULT_TOPIC.to_string(), DEFAULT_TASK.to_string()));
    let action = latest
        .as_ref()
        .and_then(|entry| entry.action.clone())
        .unwrap_or_else(|| DEFAULT_ACTION.to_string());

    Plan {
        student,
        current_topic,
        action,
        task,
        mastery,
        activity,
    }
}

/// Extracts (current_topic, task) from an activity entry's `result`.
///
/// An object result carries both fields itself; a plain string result is the
/// task, with the topic taken from the entry's own `topic` column when one
/// exists.
pub fn derive_focus(entry: &ActivityLogEntry) -> (String, String) {
    match &entry.result {
        Some(Value::Object(result)) => {
            let topic = result
                .get("topic")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_TOPIC);
            let task = result
                .get("task")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_TASK);
            (topic.to_string(), task.to_string())
        }
        Some(Value::String(task)) => {
            let topic = entry.topic.clone().unwrap_or_else(|| DEFAULT_TOPIC.to_string());
            (topic, task.clone())
        }
        _ => (DEFAULT_TOPIC.to_string(), DEFAULT_TASK.to_string()),
    }
}

/// Formats one history line as "action: result". String results are shown
/// bare; structured results are rendered as compact JSON.
fn activity_line(entry: &ActivityLogEntry) -> String {
    let action = entry.action.as_deref().unwrap_or("Unknown");
    let result = match &entry.result {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "No details".to_string(),
    };
    format!("{action}: {result}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(result: Value, topic: Option<&str>) -> ActivityLogEntry {
        ActivityLogEntry::from_row(&json!({
            "student_id": "s-1",
            "action": "ASSIGN_TASK",
            "result": result,
            "topic": topic,
        }))
    }

    #[test]
    fn focus_from_structured_result() {
        let (topic, task) = derive_focus(&entry(
            json!({"topic": "Fractions", "task": "Worksheet 3"}),
            None,
        ));
        assert_eq!(topic, "Fractions");
        assert_eq!(task, "Worksheet 3");
    }

    #[test]
    fn focus_from_string_result_uses_entry_topic() {
        let (topic, task) = derive_focus(&entry(json!("Review Ch.2"), Some("Geometry")));
        assert_eq!(topic, "Geometry");
        assert_eq!(task, "Review Ch.2");
    }

    #[test]
    fn focus_from_string_result_without_topic_column() {
        let (topic, task) = derive_focus(&entry(json!("Review Ch.2"), None));
        assert_eq!(topic, DEFAULT_TOPIC);
        assert_eq!(task, "Review Ch.2");
    }

    #[test]
    fn focus_defaults_when_result_missing() {
        let (topic, task) = derive_focus(&entry(Value::Null, None));
        assert_eq!(topic, DEFAULT_TOPIC);
        assert_eq!(task, DEFAULT_TASK);
    }

    #[test]
    fn partial_structured_result_keeps_field_defaults() {
        let (topic, task) = derive_focus(&entry(json!({"topic": "Algebra"}), None));
        assert_eq!(topic, "Algebra");
        assert_eq!(task, DEFAULT_TASK);
    }

    #[test]
    fn activity_line_renders_string_and_object_results() {
        let line = activity_line(&entry(json!("Review Ch.2"), None));
        assert_eq!(line, "ASSIGN_TASK: Review Ch.2");

        let line = activity_line(&entry(json!({"task": "Worksheet 1"}), None));
        assert_eq!(line, r#"ASSIGN_TASK: {"task":"Worksheet 1"}"#);
    }
}
