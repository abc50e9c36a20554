use chrono::{DateTime, Utc};

use crate::models::{Assignment, DueUrgency, RankedAssignment};

pub const CLOSED_SCORE: f64 = -100.0;

const MS_PER_DAY: f64 = 86_400_000.0;
const BARELY_STARTED_MINUTES: f64 = 30.0;
const BARELY_STARTED_BONUS: f64 = 20.0;

/// Whole days until the assignment is due, rounded up.
///
/// A backend-computed `days_until_due` wins over deriving from `due_at`.
pub fn days_left(assignment: &Assignment, now: DateTime<Utc>) -> Option<i64> {
    if let Some(days) = assignment.days_until_due {
        return Some(days);
    }
    assignment.due_at.map(|due_at| {
        let millis = (due_at - now).num_milliseconds() as f64;
        (millis / MS_PER_DAY).ceil() as i64
    })
}

pub fn urgency_weight(days_left: Option<i64>) -> f64 {
    match days_left {
        None => 0.0,
        Some(days) if days <= 1 => 100.0,
        Some(days) if days <= 3 => 70.0,
        Some(days) if days <= 7 => 40.0,
        Some(_) => 10.0,
    }
}

pub fn score_assignment(assignment: &Assignment, now: DateTime<Utc>) -> f64 {
    if assignment.status.is_closed() {
        return CLOSED_SCORE;
    }

    let mut score = urgency_weight(days_left(assignment, now));
    if assignment.time_spent_minutes < BARELY_STARTED_MINUTES {
        score += BARELY_STARTED_BONUS;
    }
    score
}

/// Positive-scoring assignments, most urgent first; ties keep input order.
pub fn rank_assignments(assignments: &[Assignment], now: DateTime<Utc>) -> Vec<RankedAssignment<'_>> {
    let mut ranked: Vec<RankedAssignment<'_>> = assignments
        .iter()
        .map(|assignment| RankedAssignment {
            assignment,
            score: score_assignment(assignment, now),
            days_left: days_left(assignment, now),
        })
        .filter(|entry| entry.score > 0.0)
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for entry in &ranked {
        log::debug!(
            "assignment {} scored {:.2} ({:?} days left)",
            entry.assignment.id,
            entry.score,
            entry.days_left
        );
    }
    ranked
}

pub fn urgent_assignment(assignments: &[Assignment], now: DateTime<Utc>) -> Option<RankedAssignment<'_>> {
    rank_assignments(assignments, now).into_iter().next()
}

/// Short countdown label, only shown once the due date is three days out or closer.
pub fn due_label(days_left: i64) -> Option<String> {
    match days_left {
        0 => Some("DUE TODAY".to_string()),
        1 => Some("DUE TOMORROW".to_string()),
        d if d <= 3 => Some(format!("{d} days left")),
        _ => None,
    }
}

/// Text placed after "due" in the nudge: the countdown label when close,
/// otherwise the calendar date when one is known.
pub fn due_display(ranked: &RankedAssignment<'_>) -> Option<String> {
    if let Some(label) = ranked.days_left.and_then(due_label) {
        return Some(label);
    }
    ranked
        .assignment
        .due_at
        .map(|due_at| due_at.format("%a, %b %-d").to_string())
}

impl DueUrgency {
    pub fn from_days_left(days_left: Option<i64>) -> Self {
        match days_left {
            Some(days) if days <= 1 => Self::Red,
            Some(days) if days <= 3 => Self::Yellow,
            _ => Self::Green,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Green => "green",
        }
    }
}
