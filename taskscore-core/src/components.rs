//! Component scorers: one bounded score per task attribute.
//!
//! Each scorer is a pure function. Higher is always "do this sooner".
//!
//! Ranges:
//! - urgency: 1.0..=15.0 (overdue tasks go above 10)
//! - importance: 1.0..=10.0
//! - effort: 1.0..=10.0 (less work scores higher)
//! - dependency: 3.0..=10.0 (more dependents scores higher)

use crate::dependencies::DependencyMap;
use crate::task::TaskId;

/// Urgency from signed days until the due date.
pub fn urgency_score(days_diff: i64) -> f64 {
    match days_diff {
        d if d < 0 => {
            let overdue_days = d.unsigned_abs() as f64;
            (10.0 + (overdue_days * 0.5).min(5.0)).min(15.0)
        }
        0 => 10.0,
        d if d <= 3 => 9.0,
        d if d <= 7 => 8.0 - (d - 3) as f64 * 0.25,
        d if d <= 14 => 6.5 - (d - 7) as f64 * 0.2,
        d if d <= 30 => 4.5 - (d - 14) as f64 * 0.1,
        // Asymptotic decay for distant deadlines.
        d => (3.0 - ((d - 29) as f64).log10()).max(1.0),
    }
}

/// Importance rating clamped to 1..=10.
pub fn importance_score(importance: i32) -> f64 {
    f64::from(importance.clamp(1, 10))
}

/// Effort score from estimated hours; rewards quick wins.
///
/// Invalid hours (zero, negative, NaN) score a neutral 5.0.
pub fn effort_score(hours: f64) -> f64 {
    if hours.is_nan() || hours <= 0.0 {
        return 5.0;
    }

    match hours {
        h if h < 1.0 => 10.0,
        h if h <= 2.0 => 9.0,
        h if h <= 4.0 => 8.0 - (h - 2.0) * 0.5,
        h if h <= 8.0 => 6.0 - (h - 4.0) * 0.25,
        h => (5.0 - (h - 7.0).log10()).max(1.0),
    }
}

/// Score for a given number of tasks blocked by this one.
pub fn blocked_count_score(blocked_count: usize) -> f64 {
    match blocked_count {
        0 => 3.0,
        1 => 6.0,
        2 => 8.0,
        _ => 10.0,
    }
}

/// Dependency score: how many tasks declared `task_id` as a prerequisite.
pub fn dependency_score(task_id: TaskId, dependency_map: &DependencyMap) -> f64 {
    blocked_count_score(dependency_map.blocked_count(task_id))
}
