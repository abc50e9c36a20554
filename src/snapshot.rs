use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::models::{Assignment, AssignmentStatus, Snapshot};

pub fn load_snapshot(path: &Path) -> anyhow::Result<Snapshot> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&body)
        .with_context(|| format!("snapshot {} is not valid JSON", path.display()))?;
    log::info!(
        "loaded snapshot: {} goals, {} assignments",
        snapshot.goals.as_ref().map_or(0, Vec::len),
        snapshot.assignments.as_ref().map_or(0, Vec::len)
    );
    Ok(snapshot)
}

pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, body)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    Ok(())
}

pub fn import_assignments_csv(csv_path: &Path) -> anyhow::Result<Vec<Assignment>> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        id: String,
        title: String,
        course_name: String,
        status: AssignmentStatus,
        due_at: Option<String>,
        time_spent_minutes: Option<f64>,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;
    let mut assignments = Vec::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result.with_context(|| format!("bad row in {}", csv_path.display()))?;
        let due_at = match row.due_at.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(err) => {
                    log::warn!("skipping assignment {}: bad due_at {raw:?} ({err})", row.id);
                    continue;
                }
            },
        };

        assignments.push(Assignment {
            id: row.id,
            title: row.title,
            course_name: row.course_name,
            status: row.status,
            due_at,
            days_until_due: None,
            time_spent_minutes: row.time_spent_minutes.unwrap_or(0.0),
        });
    }

    Ok(assignments)
}

/// Adds imported rows to the snapshot, replacing any with the same id.
/// Returns how many rows were new.
pub fn merge_assignments(snapshot: &mut Snapshot, imported: Vec<Assignment>) -> usize {
    let existing = snapshot.assignments.get_or_insert_with(Vec::new);
    let mut inserted = 0usize;

    for assignment in imported {
        match existing.iter_mut().find(|a| a.id == assignment.id) {
            Some(slot) => *slot = assignment,
            None => {
                existing.push(assignment);
                inserted += 1;
            }
        }
    }

    inserted
}
