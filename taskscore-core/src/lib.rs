//! taskscore-core: priority scoring engine for task batches.
//!
//! Turns due date, importance, effort and the dependency graph of each task
//! into a weighted priority score, flags circular dependencies, ranks the batch
//! and explains each ranking. Pure computation: no storage, no network.

pub mod components;
pub mod dependencies;
pub mod explain;
pub mod scoring;
pub mod strategy;
pub mod task;
pub mod time;

pub use components::{dependency_score, effort_score, importance_score, urgency_score};
pub use dependencies::{build_dependency_map, detect_circular_dependencies, DependencyMap};
pub use explain::{generate_recommendation, generate_score_explanation};
pub use scoring::{AnalyzedTask, ScoreBreakdown, ScoringEngine, SuggestedTask};
pub use strategy::{Strategy, UnknownStrategy, Weights};
pub use task::{Task, TaskId, DEFAULT_ESTIMATED_HOURS, DEFAULT_IMPORTANCE};
pub use time::{days_until, parse_date, today_in};
