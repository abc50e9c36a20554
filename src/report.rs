use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::assignments;
use crate::goals;
use crate::insights;
use crate::models::{DueUrgency, FocusSelection, FocusSource, Goal, Snapshot};

/// Goals met today as a rounded percentage of active goals.
pub fn daily_progress(rows: &[Goal]) -> (usize, usize, u32) {
    let active: Vec<&Goal> = rows.iter().filter(|g| g.is_active).collect();
    let completed = active.iter().filter(|g| goals::is_met_today(g)).count();
    let total = active.len();
    let pct = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    };
    (completed, total, pct)
}

fn source_label(source: Option<FocusSource>) -> &'static str {
    match source {
        Some(FocusSource::Manual) => "set manually",
        Some(FocusSource::Goal) => "top-ranked goal",
        Some(FocusSource::Backend) => "suggested by server",
        None => "none",
    }
}

pub fn build_report(
    snapshot: &Snapshot,
    selection: &FocusSelection,
    message: &str,
    picker_size: usize,
    now: DateTime<Utc>,
) -> String {
    let goal_rows = snapshot.goals.as_deref().unwrap_or_default();
    let assignment_rows = snapshot.assignments.as_deref().unwrap_or_default();

    let mut output = String::new();
    let _ = writeln!(output, "# Trail Focus Report");
    let _ = writeln!(output, "Generated {}", now.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Current Focus");

    match selection.focus_title.as_deref() {
        Some(title) => {
            let _ = writeln!(output, "{} ({})", title, source_label(selection.focus_source));
        }
        None => {
            let _ = writeln!(output, "No focus set.");
        }
    }

    let (completed, total, pct) = daily_progress(goal_rows);
    let _ = writeln!(output, "Today: {completed}/{total} goals met ({pct}%)");

    let _ = writeln!(output);
    let _ = writeln!(output, "## Goal Picker");

    let picker = goals::goal_picker(goal_rows, picker_size);
    if picker.is_empty() {
        let _ = writeln!(output, "No active goals.");
    } else {
        for ranked in picker.iter() {
            let _ = writeln!(
                output,
                "- {} score {:.1} (streak {}, {}/{})",
                ranked.goal.title,
                ranked.score,
                ranked.goal.current_streak,
                ranked.goal.today_progress,
                ranked.goal.target_value
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Upcoming Assignments");

    let ranked = assignments::rank_assignments(assignment_rows, now);
    if ranked.is_empty() {
        let _ = writeln!(output, "Nothing due.");
    } else {
        for entry in ranked.iter().take(5) {
            let urgency = DueUrgency::from_days_left(entry.days_left);
            let suffix = entry
                .days_left
                .and_then(assignments::due_label)
                .map(|label| format!(" • {label}"))
                .unwrap_or_default();
            let _ = writeln!(
                output,
                "- [{}] {} ({}){} score {:.0}",
                urgency.as_str(),
                entry.assignment.title,
                entry.assignment.course_name,
                suffix,
                entry.score
            );
        }
    }

    if let Some(screen_time) = snapshot.screen_time.as_ref() {
        let insight = insights::daily_insight(screen_time);
        let _ = writeln!(output);
        let _ = writeln!(output, "## Screen Time");
        let _ = writeln!(output, "{:.0} minutes today.", screen_time.total_minutes);
        let _ = writeln!(output, "{} {}", insight.suggestion, insight.affirmation);
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Nudge");
    for line in message.lines() {
        let _ = writeln!(output, "> {line}");
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, AssignmentStatus};
    use chrono::TimeZone;

    fn goal(title: &str, active: bool, progress: f64) -> Goal {
        Goal {
            id: title.to_lowercase(),
            title: title.to_string(),
            is_active: active,
            current_streak: 1,
            today_progress: progress,
            target_value: 2.0,
        }
    }

    #[test]
    fn progress_counts_active_goals_only() {
        let goals = vec![goal("A", true, 2.0), goal("B", true, 0.0), goal("C", false, 2.0)];
        assert_eq!(daily_progress(&goals), (1, 2, 50));
        assert_eq!(daily_progress(&[]), (0, 0, 0));
    }

    #[test]
    fn report_lists_sections() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let snapshot = Snapshot {
            goals: Some(vec![goal("Stretch", true, 0.0)]),
            assignments: Some(vec![Assignment {
                id: "a1".to_string(),
                title: "Lab report".to_string(),
                course_name: "Chem 101".to_string(),
                status: AssignmentStatus::Upcoming,
                due_at: None,
                days_until_due: Some(0),
                time_spent_minutes: 0.0,
            }]),
            nudge: None,
            screen_time: None,
        };
        let selection = FocusSelection {
            focus_title: Some("Stretch".to_string()),
            focus_source: Some(FocusSource::Goal),
            ..FocusSelection::default()
        };

        let report = build_report(&snapshot, &selection, "line one\n\nline two", 4, now);
        assert!(report.contains("Stretch (top-ranked goal)"));
        assert!(report.contains("Today: 0/1 goals met (0%)"));
        assert!(report.contains("- [red] Lab report (Chem 101) • DUE TODAY score 120"));
        assert!(report.contains("> line two"));
        assert!(!report.contains("## Screen Time"));
    }

    #[test]
    fn empty_snapshot_reports_placeholders() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        let report = build_report(&Snapshot::default(), &FocusSelection::default(), "", 4, now);
        assert!(report.contains("No focus set."));
        assert!(report.contains("No active goals."));
        assert!(report.contains("Nothing due."));
    }
}
