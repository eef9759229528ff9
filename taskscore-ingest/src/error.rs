//! Validation errors for incoming task batches.

use thiserror::Error;

/// Why a batch was rejected. `index` is the 0-based position in the batch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IngestError {
    #[error("no tasks provided")]
    EmptyBatch,

    #[error("task at index {index} missing required field: {field}")]
    MissingField { index: usize, field: &'static str },

    #[error("task at index {index}: invalid due_date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { index: usize, value: String },

    #[error("task at index {index}: importance must be 1-10, got {value}")]
    ImportanceOutOfRange { index: usize, value: i64 },

    #[error("task at index {index}: estimated_hours must be positive, got {value}")]
    NonPositiveHours { index: usize, value: f64 },

    #[error("task at index {index}: duplicate id {id}")]
    DuplicateId { index: usize, id: i64 },

    #[error("unknown strategy '{0}' (expected one of: smart_balance, fastest_wins, high_impact, deadline_driven)")]
    UnknownStrategy(String),

    #[error("count must be between 1 and {max}, got {value}")]
    CountOutOfRange { value: i64, max: usize },
}
