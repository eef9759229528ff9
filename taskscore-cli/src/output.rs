//! Rendering of analysis results: JSON envelopes or one line per task.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use taskscore_core::{AnalyzedTask, Strategy, SuggestedTask};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct AnalyzeResponse<'a> {
    status: &'static str,
    strategy: Strategy,
    total_tasks: usize,
    tasks: &'a [AnalyzedTask],
}

#[derive(Serialize)]
struct SuggestResponse<'a> {
    status: &'static str,
    strategy: Strategy,
    suggestion_count: usize,
    suggestions: &'a [SuggestedTask],
}

fn task_line(a: &AnalyzedTask) -> String {
    let cycle = if a.has_circular_dependency { " [circular dependency]" } else { "" };
    format!(
        "{:>6.2} | #{} {} (due {}){} | {}",
        a.priority_score, a.task.id, a.task.title, a.task.due_date, cycle, a.explanation
    )
}

pub fn render_analysis(strategy: Strategy, tasks: &[AnalyzedTask], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&AnalyzeResponse {
            status: "success",
            strategy,
            total_tasks: tasks.len(),
            tasks,
        })?),
        OutputFormat::Text => {
            let mut out = format!("Analyzed {} tasks (strategy: {})\n\n", tasks.len(), strategy);
            for a in tasks {
                out.push_str(&task_line(a));
                out.push('\n');
            }
            Ok(out)
        }
    }
}

pub fn render_suggestions(strategy: Strategy, suggestions: &[SuggestedTask], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&SuggestResponse {
            status: "success",
            strategy,
            suggestion_count: suggestions.len(),
            suggestions,
        })?),
        OutputFormat::Text => {
            let mut out = format!("Top {} tasks (strategy: {})\n\n", suggestions.len(), strategy);
            for s in suggestions {
                out.push_str(&task_line(&s.analyzed));
                out.push_str(&format!("\n       {}\n", s.recommendation));
            }
            Ok(out)
        }
    }
}

pub fn render_strategies() -> String {
    let mut out = String::from("strategy          urgency  importance  effort  dependencies\n");
    for s in Strategy::ALL {
        let w = s.weights();
        out.push_str(&format!(
            "{:<16}  {:>7.2}  {:>10.2}  {:>6.2}  {:>12.2}\n",
            s.name(),
            w.urgency,
            w.importance,
            w.effort,
            w.dependencies
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use taskscore_core::{ScoringEngine, Task};

    fn sample() -> (ScoringEngine, Vec<Task>) {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let tasks = vec![
            Task::new(1, "Pay invoice", today).with_hours(0.5).with_importance(9),
            Task::new(2, "Plan offsite", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
                .with_hours(6.0)
                .with_importance(3)
                .with_dependencies([3]),
            Task::new(3, "Book venue", NaiveDate::from_ymd_opt(2026, 5, 1).unwrap())
                .with_hours(6.0)
                .with_importance(3)
                .with_dependencies([2]),
        ];
        (ScoringEngine::new(Strategy::SmartBalance, today), tasks)
    }

    #[test]
    fn test_text_analysis_lists_each_task() {
        let (engine, tasks) = sample();
        let out = render_analysis(engine.strategy(), &engine.analyze_tasks(&tasks), OutputFormat::Text).unwrap();
        assert!(out.starts_with("Analyzed 3 tasks (strategy: smart_balance)"));
        assert!(out.contains("#1 Pay invoice (due 2026-03-01) | Due TODAY"));
        assert_eq!(out.matches("[circular dependency]").count(), 2);
    }

    #[test]
    fn test_json_suggestions_envelope() {
        let (engine, tasks) = sample();
        let top = engine.get_top_suggestions(&tasks, 2);
        let out = render_suggestions(engine.strategy(), &top, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["strategy"], "smart_balance");
        assert_eq!(v["suggestion_count"], 2);
        assert_eq!(v["suggestions"][0]["rank"], 1);
        assert_eq!(v["suggestions"][0]["id"], 1);
    }

    #[test]
    fn test_strategy_table() {
        let out = render_strategies();
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("deadline_driven"));
        assert!(out.contains("0.60"));
    }
}
