//! taskscore-ingest: validation of raw task batches before they reach the engine.
//!
//! Input arrives as loosely typed records (JSON request bodies or CSV exports).
//! This crate enforces the contract the scoring engine relies on: required
//! fields present, dates resolved, ranges checked, ids unique.

pub mod error;
pub mod parsers;
pub mod types;
pub mod validate;

pub use error::IngestError;
pub use parsers::{parse_request_json, parse_tasks_csv, parse_tasks_csv_str};
pub use types::{AnalysisRequest, RawTask};
pub use validate::{
    parse_strategy, validate_count, validate_tasks, DEFAULT_SUGGESTION_COUNT, MAX_SUGGESTION_COUNT,
};
