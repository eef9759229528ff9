use serde::{Deserialize, Serialize};

/// A task record as submitted, before validation.
///
/// Every field is optional here; `validate_tasks` decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTask {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    /// ISO date string, e.g. "2026-11-30".
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: Option<f64>,
    #[serde(default)]
    pub importance: Option<i64>,
    #[serde(default)]
    pub dependencies: Option<Vec<i64>>,
}

/// Request envelope for analyze/suggest calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub tasks: Vec<RawTask>,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}
