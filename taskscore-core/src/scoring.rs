//! Scoring engine: aggregates component scores and ranks a batch of tasks.
//!
//! Pipeline per call:
//! 1) reverse dependency index + cycle set (once per batch)
//! 2) component scores per task, weighted by the strategy
//! 3) explanation per task
//! 4) stable sort by priority score, descending
//!
//! The engine is immutable after construction and holds no per-call state,
//! so one instance can serve concurrent callers.

use crate::components::{dependency_score, effort_score, importance_score, urgency_score};
use crate::dependencies::{build_dependency_map, detect_circular_dependencies, DependencyMap};
use crate::explain::{generate_recommendation, generate_score_explanation};
use crate::strategy::{Strategy, Weights};
use crate::task::Task;
use crate::time::days_until;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-task component scores, rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub urgency_score: f64,
    pub importance_score: f64,
    pub effort_score: f64,
    pub dependency_score: f64,
    pub weights_used: Weights,
}

/// A task annotated with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub explanation: String,
    pub has_circular_dependency: bool,
}

/// One of the top-ranked tasks, with a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTask {
    #[serde(flatten)]
    pub analyzed: AnalyzedTask,
    /// 1-based.
    pub rank: usize,
    pub recommendation: String,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringEngine {
    strategy: Strategy,
    weights: Weights,
    today: NaiveDate,
}

impl ScoringEngine {
    /// Engine for `strategy`, scoring deadlines relative to `today`.
    pub fn new(strategy: Strategy, today: NaiveDate) -> Self {
        Self {
            strategy,
            weights: strategy.weights(),
            today,
        }
    }

    /// Lenient constructor: unknown strategy names use `smart_balance`.
    pub fn from_strategy_name(name: &str, today: NaiveDate) -> Self {
        Self::new(Strategy::from_name_or_default(name), today)
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Weighted score for one task against a prebuilt dependency index.
    pub fn calculate_priority_score(&self, task: &Task, dependency_map: &DependencyMap) -> ScoreBreakdown {
        let urgency = urgency_score(days_until(task.due_date, self.today));
        let importance = importance_score(task.effective_importance());
        let effort = effort_score(task.effective_hours());
        let dependency = dependency_score(task.id, dependency_map);

        let w = &self.weights;
        let total = urgency * w.urgency
            + importance * w.importance
            + effort * w.effort
            + dependency * w.dependencies;

        ScoreBreakdown {
            total_score: round2(total),
            urgency_score: round2(urgency),
            importance_score: round2(importance),
            effort_score: round2(effort),
            dependency_score: round2(dependency),
            weights_used: self.weights,
        }
    }

    pub fn explain(&self, task: &Task, breakdown: &ScoreBreakdown) -> String {
        generate_score_explanation(task, breakdown, self.today)
    }

    /// Score every task and sort by priority, highest first.
    ///
    /// Tasks with equal scores keep their input order.
    pub fn analyze_tasks(&self, tasks: &[Task]) -> Vec<AnalyzedTask> {
        if tasks.is_empty() {
            return Vec::new();
        }

        let dependency_map = build_dependency_map(tasks);
        let circular = detect_circular_dependencies(tasks);

        tracing::debug!(
            tasks = tasks.len(),
            strategy = %self.strategy,
            circular = circular.len(),
            "analyzing task batch"
        );

        let mut analyzed: Vec<AnalyzedTask> = tasks
            .iter()
            .map(|task| {
                let breakdown = self.calculate_priority_score(task, &dependency_map);
                let explanation = self.explain(task, &breakdown);
                AnalyzedTask {
                    task: task.clone(),
                    priority_score: breakdown.total_score,
                    score_breakdown: breakdown,
                    explanation,
                    has_circular_dependency: circular.contains(&task.id),
                }
            })
            .collect();

        // sort_by is stable.
        analyzed.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        analyzed
    }

    /// The `count` highest-priority tasks, ranked and annotated.
    pub fn get_top_suggestions(&self, tasks: &[Task], count: usize) -> Vec<SuggestedTask> {
        self.analyze_tasks(tasks)
            .into_iter()
            .take(count)
            .enumerate()
            .map(|(idx, analyzed)| {
                let rank = idx + 1;
                let recommendation = generate_recommendation(&analyzed.score_breakdown, rank);
                SuggestedTask {
                    analyzed,
                    rank,
                    recommendation,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 4).unwrap()
    }

    fn due_in(days: i64) -> NaiveDate {
        today() + Duration::days(days)
    }

    fn engine(strategy: Strategy) -> ScoringEngine {
        ScoringEngine::new(strategy, today())
    }

    #[test]
    fn test_breakdown_components_and_total() {
        let t = Task::new(1, "ship", due_in(7)).with_hours(5.0).with_importance(5);
        let b = engine(Strategy::SmartBalance).calculate_priority_score(&t, &DependencyMap::new());
        assert_eq!(b.urgency_score, 7.0);
        assert_eq!(b.importance_score, 5.0);
        assert_eq!(b.effort_score, 5.75);
        assert_eq!(b.dependency_score, 3.0);
        // 7*0.35 + 5*0.30 + 5.75*0.15 + 3*0.20 = 5.4125
        assert_eq!(b.total_score, 5.41);
        assert_eq!(b.weights_used, Strategy::SmartBalance.weights());
    }

    #[test]
    fn test_components_are_rounded() {
        // 31 days out: 3 - log10(2) = 2.69897...
        let t = Task::new(1, "far", due_in(31)).with_hours(9.0).with_importance(4);
        let b = engine(Strategy::SmartBalance).calculate_priority_score(&t, &DependencyMap::new());
        assert_eq!(b.urgency_score, 2.7);
        // 5 - log10(2) = 4.69897...
        assert_eq!(b.effort_score, 4.7);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let t = Task::new(1, "bare", due_in(0));
        let b = engine(Strategy::SmartBalance).calculate_priority_score(&t, &DependencyMap::new());
        assert_eq!(b.importance_score, 5.0);
        assert_eq!(b.effort_score, 9.0);
    }

    #[test]
    fn test_unknown_strategy_name_uses_smart_balance() {
        let e = ScoringEngine::from_strategy_name("nope", today());
        assert_eq!(e.strategy(), Strategy::SmartBalance);
        assert_eq!(e.weights(), Strategy::SmartBalance.weights());
    }

    #[test]
    fn test_analyze_empty() {
        assert!(engine(Strategy::SmartBalance).analyze_tasks(&[]).is_empty());
        assert!(engine(Strategy::HighImpact).get_top_suggestions(&[], 5).is_empty());
    }

    #[test]
    fn test_analyze_sorts_descending() {
        let tasks = vec![
            Task::new(1, "later", due_in(30)).with_hours(10.0).with_importance(2),
            Task::new(2, "soon", due_in(1)).with_hours(2.0).with_importance(9),
            Task::new(3, "week", due_in(7)).with_hours(5.0).with_importance(5),
        ];
        let out = engine(Strategy::SmartBalance).analyze_tasks(&tasks);
        let order: Vec<_> = out.iter().map(|a| a.task.id).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(out[0].priority_score > out[1].priority_score);
        assert!(out[1].priority_score > out[2].priority_score);
    }

    #[test]
    fn test_equal_scores_keep_input_order() {
        let tasks = vec![
            Task::new(5, "a", due_in(10)).with_hours(3.0).with_importance(4),
            Task::new(2, "b", due_in(10)).with_hours(3.0).with_importance(4),
            Task::new(9, "c", due_in(10)).with_hours(3.0).with_importance(4),
        ];
        let out = engine(Strategy::SmartBalance).analyze_tasks(&tasks);
        let order: Vec<_> = out.iter().map(|a| a.task.id).collect();
        assert_eq!(order, vec![5, 2, 9]);
    }

    #[test]
    fn test_cycle_flag_does_not_block_scoring() {
        let tasks = vec![
            Task::new(1, "a", due_in(3)).with_dependencies([2]),
            Task::new(2, "b", due_in(3)).with_dependencies([1]),
            Task::new(3, "c", due_in(3)),
        ];
        let out = engine(Strategy::SmartBalance).analyze_tasks(&tasks);
        assert_eq!(out.len(), 3);
        for a in &out {
            assert_eq!(a.has_circular_dependency, a.task.id != 3);
            assert!(a.priority_score > 0.0);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tasks = vec![Task::new(1, "a", due_in(3)).with_importance(40).with_dependencies([7])];
        let before = tasks.clone();
        let out = engine(Strategy::HighImpact).analyze_tasks(&tasks);
        assert_eq!(tasks, before);
        // Output carries the raw input; only the score is clamped.
        assert_eq!(out[0].task.importance, Some(40));
        assert_eq!(out[0].score_breakdown.importance_score, 10.0);
    }

    #[test]
    fn test_strategies_change_totals() {
        let t = vec![Task::new(1, "x", due_in(0)).with_hours(6.0).with_importance(3)];
        let balanced = engine(Strategy::SmartBalance).analyze_tasks(&t);
        let deadline = engine(Strategy::DeadlineDriven).analyze_tasks(&t);
        assert!(deadline[0].priority_score > balanced[0].priority_score);
    }

    #[test]
    fn test_top_suggestions_ranks_and_recommends() {
        let tasks: Vec<Task> = (1..=5)
            .map(|i| Task::new(i, format!("task {i}"), due_in(i * 3)).with_hours(i as f64).with_importance(10 - i as i32))
            .collect();
        let top = engine(Strategy::SmartBalance).get_top_suggestions(&tasks, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top.iter().map(|s| s.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
        for s in &top {
            assert!(s.recommendation.starts_with(&format!("Recommended #{}", s.rank)));
        }
    }

    #[test]
    fn test_top_suggestions_count_larger_than_batch() {
        let tasks = vec![Task::new(1, "a", due_in(1)), Task::new(2, "b", due_in(2))];
        let e = engine(Strategy::FastestWins);
        assert_eq!(e.get_top_suggestions(&tasks, 10).len(), 2);
        assert!(e.get_top_suggestions(&tasks, 0).is_empty());
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let tasks = vec![Task::new(4, "flat", due_in(1)).with_hours(1.0).with_importance(7)];
        let top = engine(Strategy::SmartBalance).get_top_suggestions(&tasks, 1);
        let v = serde_json::to_value(&top[0]).unwrap();
        assert_eq!(v["id"], 4);
        assert_eq!(v["title"], "flat");
        assert_eq!(v["due_date"], "2026-05-05");
        assert_eq!(v["rank"], 1);
        assert_eq!(v["has_circular_dependency"], false);
        assert!(v["score_breakdown"]["weights_used"]["urgency"].is_number());
        assert!(v["priority_score"].is_number());
    }
}
