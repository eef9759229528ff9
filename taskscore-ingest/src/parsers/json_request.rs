//! JSON request bodies.
//!
//! Accepted shapes:
//!   [ {task}, {task}, ... ]
//!   { "tasks": [...], "strategy": "high_impact", "count": 5 }

use anyhow::{Context, Result};

use crate::types::{AnalysisRequest, RawTask};

/// Parse either request shape. The shape is picked from the first token so
/// that type errors keep serde_json's line and column.
pub fn parse_request_json(text: &str) -> Result<AnalysisRequest> {
    if text.trim_start().starts_with('[') {
        let tasks: Vec<RawTask> = serde_json::from_str(text).context("parse task array JSON")?;
        return Ok(AnalysisRequest {
            tasks,
            ..AnalysisRequest::default()
        });
    }

    serde_json::from_str(text).context("parse task request JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let req = parse_request_json(
            r#"[{"title": "Fix login", "due_date": "2026-03-01", "estimated_hours": 2, "importance": 9}]"#,
        )
        .unwrap();
        assert_eq!(req.tasks.len(), 1);
        assert_eq!(req.tasks[0].estimated_hours, Some(2.0));
        assert_eq!(req.strategy, None);
        assert_eq!(req.count, None);
    }

    #[test]
    fn test_parse_envelope() {
        let req = parse_request_json(
            r#"{
                "strategy": "deadline_driven",
                "count": 5,
                "tasks": [
                    {"id": 3, "title": "A", "due_date": "2026-03-01", "estimated_hours": 1.5,
                     "importance": 4, "dependencies": [1, 2]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(req.strategy.as_deref(), Some("deadline_driven"));
        assert_eq!(req.count, Some(5));
        assert_eq!(req.tasks[0].id, Some(3));
        assert_eq!(req.tasks[0].dependencies, Some(vec![1, 2]));
    }

    #[test]
    fn test_missing_fields_survive_parsing() {
        // Required-field checks belong to validation, not parsing.
        let req = parse_request_json(r#"[{"title": "half"}]"#).unwrap();
        assert_eq!(req.tasks[0].due_date, None);
    }

    #[test]
    fn test_type_error_reports_position() {
        let text = "[\n  {\"title\": \"A\", \"importance\": 5},\n  {\"title\": \"B\", \"importance\": 5.5}\n]";
        let err = format!("{:#}", parse_request_json(text).unwrap_err());
        assert!(err.contains("line 3"), "{err}");
        assert!(err.contains("5.5"), "{err}");

        let text = "{\"tasks\": [\n  {\"title\": \"A\", \"estimated_hours\": \"two\"}\n]}";
        let err = format!("{:#}", parse_request_json(text).unwrap_err());
        assert!(err.contains("line 2"), "{err}");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse_request_json("not json").is_err());
        assert!(parse_request_json(r#""just a string""#).is_err());
    }
}
