use chrono::{DateTime, Utc};

use crate::assignments;
use crate::goals;
use crate::models::{Assignment, DueUrgency, FocusSelection, FocusSource, Goal, NudgeFallback};

/// Accepts a user-entered focus only when it is non-blank after trimming.
pub fn normalize_override(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        log::warn!("ignoring blank focus override");
        return None;
    }
    Some(trimmed.to_string())
}

/// Picks the focus title and the upcoming assignment for the shield.
///
/// Goal and assignment lanes resolve independently. The goal lane falls back
/// to the backend's goal whenever no active local goal exists; the assignment
/// lane only when the client holds no local rows.
pub fn select_focus(
    goals: Option<&[Goal]>,
    assignments: Option<&[Assignment]>,
    manual_override: Option<&str>,
    fallback: Option<&NudgeFallback>,
    now: DateTime<Utc>,
) -> FocusSelection {
    let mut selection = FocusSelection::default();

    let top = goals.and_then(goals::top_goal);
    if let Some(title) = manual_override.filter(|title| !title.trim().is_empty()) {
        selection.focus_title = Some(title.to_string());
        selection.focus_source = Some(FocusSource::Manual);
    } else if let Some(top) = top {
        selection.focus_title = Some(top.goal.title.clone());
        selection.focus_source = Some(FocusSource::Goal);
    } else if let Some(title) = fallback.and_then(|f| f.current_goal.as_deref()).filter(|t| !t.is_empty()) {
        selection.focus_title = Some(title.to_string());
        selection.focus_source = Some(FocusSource::Backend);
    }

    match assignments.filter(|rows| !rows.is_empty()) {
        Some(rows) => {
            if let Some(top) = assignments::urgent_assignment(rows, now) {
                selection.assignment_title = Some(top.assignment.title.clone());
                selection.assignment_due_display = assignments::due_display(&top);
                selection.assignment_urgency = Some(DueUrgency::from_days_left(top.days_left));
            }
        }
        None => {
            if let Some(fallback) = fallback {
                selection.assignment_title = fallback.upcoming_assignment.clone().filter(|t| !t.is_empty());
                if selection.assignment_title.is_some() {
                    selection.assignment_due_display = fallback.assignment_due.clone();
                }
            }
        }
    }

    log::info!(
        "focus resolved: {:?} ({:?}), assignment {:?}",
        selection.focus_title,
        selection.focus_source,
        selection.assignment_title
    );
    selection
}
