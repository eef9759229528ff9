//! Task model consumed by the scoring engine.
//!
//! The request layer (taskscore-ingest) is responsible for producing well-formed
//! tasks; the engine only reads them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type TaskId = i64;

/// Importance used when a task carries none.
pub const DEFAULT_IMPORTANCE: i32 = 5;

/// Estimated hours used when a task carries none.
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;

/// Core task type.
///
/// Note: `importance` and `estimated_hours` are optional so that partially
/// filled records still score; the engine substitutes the defaults above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,

    /// Calendar deadline, no time-of-day.
    pub due_date: NaiveDate,

    /// Hours of work. Non-positive values are tolerated and score neutrally.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,

    /// 1-10 rating. Out-of-range values are clamped when scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<i32>,

    /// Ids of tasks that must complete before this one.
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            estimated_hours: None,
            importance: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_hours(mut self, hours: f64) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = Some(importance);
        self
    }

    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = TaskId>) -> Self {
        self.dependencies = deps.into_iter().collect();
        self
    }

    /// Importance with the default applied (not clamped).
    pub fn effective_importance(&self) -> i32 {
        self.importance.unwrap_or(DEFAULT_IMPORTANCE)
    }

    /// Estimated hours with the default applied.
    pub fn effective_hours(&self) -> f64 {
        self.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_apply_when_fields_missing() {
        let t = Task::new(1, "write report", date(2026, 3, 1));
        assert_eq!(t.effective_importance(), 5);
        assert_eq!(t.effective_hours(), 1.0);
        assert!(t.dependencies.is_empty());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{"id": 7, "title": "inbox zero", "due_date": "2026-03-01"}"#;
        let t: Task = serde_json::from_str(json).unwrap();
        assert_eq!(t.id, 7);
        assert_eq!(t.due_date, date(2026, 3, 1));
        assert_eq!(t.importance, None);
        assert_eq!(t.estimated_hours, None);
        assert!(t.dependencies.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let t = Task::new(2, "deploy", date(2026, 3, 1))
            .with_hours(3.5)
            .with_importance(8)
            .with_dependencies([1, 4]);
        assert_eq!(t.effective_hours(), 3.5);
        assert_eq!(t.effective_importance(), 8);
        assert_eq!(t.dependencies, vec![1, 4]);
    }
}
