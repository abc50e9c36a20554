use crate::models::{DailyScreenTime, ScreenTimeCategory};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insight {
    pub suggestion: &'static str,
    pub affirmation: &'static str,
}

pub fn minutes_in(data: &DailyScreenTime, category: ScreenTimeCategory) -> f64 {
    data.entries
        .iter()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.minutes)
        .sum()
}

/// First matching rule wins.
pub fn daily_insight(data: &DailyScreenTime) -> Insight {
    let total = data.total_minutes;
    let leisure = minutes_in(data, ScreenTimeCategory::Social)
        + minutes_in(data, ScreenTimeCategory::Entertainment);
    let productive = minutes_in(data, ScreenTimeCategory::Productivity);

    if leisure > 0.6 * total || leisure > 90.0 {
        return Insight {
            suggestion: "Consider a short break from social and entertainment apps.",
            affirmation: "Small steps lead to big changes.",
        };
    }
    if productive < 30.0 && total > 60.0 {
        return Insight {
            suggestion: "Block 30 minutes for focused work today.",
            affirmation: "You have time for what matters.",
        };
    }
    if total > 240.0 {
        return Insight {
            suggestion: "You've been on screen a lot today. A short walk could help.",
            affirmation: "Rest is part of progress.",
        };
    }
    Insight {
        suggestion: "Keep a healthy balance of focus and breaks today.",
        affirmation: "You are making progress.",
    }
}
