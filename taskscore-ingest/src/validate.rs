//! Batch validation: raw records -> engine-ready tasks.
//!
//! Rules:
//! - batch must be non-empty
//! - title, due_date, estimated_hours, importance are required
//! - importance in 1..=10, estimated_hours > 0
//! - dependencies default to empty
//! - a missing id becomes index + 1
//! - ids must be unique within the batch

use crate::error::IngestError;
use crate::types::RawTask;
use std::collections::HashSet;
use taskscore_core::{parse_date, Strategy, Task};

pub const DEFAULT_SUGGESTION_COUNT: usize = 3;
pub const MAX_SUGGESTION_COUNT: usize = 10;

pub fn validate_tasks(raw: Vec<RawTask>) -> Result<Vec<Task>, IngestError> {
    if raw.is_empty() {
        return Err(IngestError::EmptyBatch);
    }

    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for (index, r) in raw.into_iter().enumerate() {
        let task = validate_one(index, r)?;
        if !seen.insert(task.id) {
            return Err(IngestError::DuplicateId { index, id: task.id });
        }
        out.push(task);
    }

    tracing::debug!(tasks = out.len(), "validated task batch");
    Ok(out)
}

fn validate_one(index: usize, r: RawTask) -> Result<Task, IngestError> {
    let missing = |field| IngestError::MissingField { index, field };

    let title = r.title.ok_or_else(|| missing("title"))?;
    let due_raw = r.due_date.ok_or_else(|| missing("due_date"))?;
    let hours = r.estimated_hours.ok_or_else(|| missing("estimated_hours"))?;
    let importance = r.importance.ok_or_else(|| missing("importance"))?;

    let due_date = parse_date(&due_raw).map_err(|_| IngestError::InvalidDate {
        index,
        value: due_raw.clone(),
    })?;

    if !(1..=10).contains(&importance) {
        return Err(IngestError::ImportanceOutOfRange {
            index,
            value: importance,
        });
    }

    if hours.is_nan() || hours <= 0.0 {
        return Err(IngestError::NonPositiveHours { index, value: hours });
    }

    let id = r.id.unwrap_or(index as i64 + 1);

    Ok(Task::new(id, title, due_date)
        .with_hours(hours)
        .with_importance(importance as i32)
        .with_dependencies(r.dependencies.unwrap_or_default()))
}

/// Strict strategy lookup for the request boundary.
pub fn parse_strategy(name: &str) -> Result<Strategy, IngestError> {
    name.parse::<Strategy>()
        .map_err(|_| IngestError::UnknownStrategy(name.to_string()))
}

/// Suggestion count must be 1..=MAX_SUGGESTION_COUNT.
pub fn validate_count(count: i64) -> Result<usize, IngestError> {
    match usize::try_from(count) {
        Ok(n) if (1..=MAX_SUGGESTION_COUNT).contains(&n) => Ok(n),
        _ => Err(IngestError::CountOutOfRange {
            value: count,
            max: MAX_SUGGESTION_COUNT,
        }),
    }
}
