//! Human-readable justifications for scores and suggestions.

use crate::scoring::ScoreBreakdown;
use crate::task::Task;
use crate::time::days_until;
use chrono::NaiveDate;

const SEPARATOR: &str = " | ";
const FALLBACK: &str = "Standard priority task";

/// Explain why `task` scored as it did.
///
/// Fragments are independent and appear in a fixed order:
/// deadline, importance, effort, dependents.
///
/// Importance is shown after defaulting and clamping to 1..=10, the same
/// value the importance component scored. Hours use `f64`'s `Display`, so
/// whole numbers print without a fraction (`2h`, `0.5h`). Fragments are
/// plain text with no emoji markers.
pub fn generate_score_explanation(task: &Task, breakdown: &ScoreBreakdown, today: NaiveDate) -> String {
    let mut parts: Vec<String> = Vec::new();

    match days_until(task.due_date, today) {
        d if d < 0 => parts.push(format!("OVERDUE by {} days", d.unsigned_abs())),
        0 => parts.push("Due TODAY".to_string()),
        d if d <= 3 => parts.push(format!("Due in {d} days")),
        d if d <= 7 => parts.push(format!("Due this week ({d} days)")),
        _ => {}
    }

    let importance = task.effective_importance().clamp(1, 10);
    if importance >= 8 {
        parts.push(format!("High importance ({importance}/10)"));
    } else if importance >= 6 {
        parts.push(format!("Medium importance ({importance}/10)"));
    }

    let hours = task.effective_hours();
    if hours <= 2.0 {
        parts.push(format!("Quick task ({hours}h)"));
    } else if hours >= 8.0 {
        parts.push(format!("Large task ({hours}h)"));
    }

    if breakdown.dependency_score >= 8.0 {
        parts.push("Blocks multiple tasks".to_string());
    } else if breakdown.dependency_score >= 6.0 {
        parts.push("Blocks other tasks".to_string());
    }

    if parts.is_empty() {
        FALLBACK.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

/// Recommendation line for a suggestion at 1-based `rank`.
pub fn generate_recommendation(breakdown: &ScoreBreakdown, rank: usize) -> String {
    let mut reasons = Vec::new();

    if breakdown.urgency_score >= 9.0 {
        reasons.push("urgent deadline");
    }
    if breakdown.importance_score >= 8.0 {
        reasons.push("high impact");
    }
    if breakdown.effort_score >= 8.0 {
        reasons.push("quick completion");
    }
    if breakdown.dependency_score >= 7.0 {
        reasons.push("unblocks other work");
    }

    if reasons.is_empty() {
        format!("Recommended #{rank} based on balanced priority factors")
    } else {
        format!("Recommended #{rank} due to: {}", reasons.join(", "))
    }
}
