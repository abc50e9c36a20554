use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub today_progress: f64,
    #[serde(default)]
    pub target_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Upcoming,
    InProgress,
    Submitted,
    Graded,
    Missed,
}

impl AssignmentStatus {
    /// Submitted, graded and missed work can no longer be acted on.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Submitted | Self::Graded | Self::Missed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub course_name: String,
    pub status: AssignmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_until_due: Option<i64>,
    #[serde(default)]
    pub time_spent_minutes: f64,
}

/// Focus hints computed by the backend's own nudge endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NudgeFallback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_goal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upcoming_assignment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignment_due: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenTimeCategory {
    Social,
    Entertainment,
    Productivity,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeEntry {
    pub category: ScreenTimeCategory,
    pub minutes: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyScreenTime {
    #[serde(default)]
    pub total_minutes: f64,
    #[serde(default)]
    pub entries: Vec<ScreenTimeEntry>,
}

/// Everything the pipeline consumes, as last fetched from the backend.
///
/// `None` lanes mean the data was never loaded; `Some(vec![])` means it was
/// loaded and turned out empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goals: Option<Vec<Goal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<Assignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nudge: Option<NudgeFallback>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_time: Option<DailyScreenTime>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedGoal<'a> {
    pub goal: &'a Goal,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedAssignment<'a> {
    pub assignment: &'a Assignment,
    pub score: f64,
    pub days_left: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueUrgency {
    Red,
    Yellow,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSource {
    Manual,
    Goal,
    Backend,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FocusSelection {
    pub focus_title: Option<String>,
    pub focus_source: Option<FocusSource>,
    pub assignment_title: Option<String>,
    pub assignment_due_display: Option<String>,
    pub assignment_urgency: Option<DueUrgency>,
}
