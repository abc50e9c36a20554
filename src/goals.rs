use crate::models::{Goal, RankedGoal};

pub const INACTIVE_SCORE: f64 = -100.0;

const STREAK_AT_RISK_BASE: f64 = 30.0;
const COMPLETION_GAP_WEIGHT: f64 = 50.0;

pub fn score_goal(goal: &Goal) -> f64 {
    if !goal.is_active {
        return INACTIVE_SCORE;
    }

    let mut score = 0.0;
    if goal.current_streak > 0 && goal.today_progress < goal.target_value {
        score += STREAK_AT_RISK_BASE + f64::from(goal.current_streak);
    }
    score += (1.0 - completion_ratio(goal)) * COMPLETION_GAP_WEIGHT;
    score
}

/// Share of today's target already reached. A zero or malformed target counts as met.
pub fn completion_ratio(goal: &Goal) -> f64 {
    if goal.target_value.is_nan() || goal.target_value <= 0.0 {
        return 1.0;
    }
    let ratio = goal.today_progress / goal.target_value;
    if ratio.is_finite() {
        ratio
    } else {
        1.0
    }
}

pub fn is_met_today(goal: &Goal) -> bool {
    goal.today_progress >= goal.target_value
}

/// Active goals ordered by descending score; ties keep input order.
pub fn prioritize_goals(goals: &[Goal]) -> Vec<RankedGoal<'_>> {
    let mut ranked: Vec<RankedGoal<'_>> = goals
        .iter()
        .filter(|goal| goal.is_active)
        .map(|goal| RankedGoal {
            goal,
            score: score_goal(goal),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    for entry in &ranked {
        log::debug!("goal {} scored {:.2}", entry.goal.id, entry.score);
    }
    ranked
}

pub fn top_goal(goals: &[Goal]) -> Option<RankedGoal<'_>> {
    prioritize_goals(goals).into_iter().next()
}

/// Candidates offered by the manual "change focus" picker.
pub fn goal_picker(goals: &[Goal], limit: usize) -> Vec<RankedGoal<'_>> {
    let mut ranked = prioritize_goals(goals);
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn goal(id: &str, active: bool, streak: u32, progress: f64, target: f64) -> Goal {
        Goal {
            id: id.to_string(),
            title: format!("Goal {id}"),
            is_active: active,
            current_streak: streak,
            today_progress: progress,
            target_value: target,
        }
    }

    #[test]
    fn inactive_goal_gets_sentinel() {
        assert_eq!(score_goal(&goal("a", false, 10, 0.0, 5.0)), INACTIVE_SCORE);
    }

    #[test]
    fn streak_at_risk_adds_bonus() {
        let score = score_goal(&goal("a", true, 3, 1.0, 2.0));
        let expected = 30.0 + 3.0 + 0.5 * 50.0;
        assert!((score - expected).abs() < 0.001);
    }

    #[test]
    fn met_goal_with_streak_scores_zero() {
        assert_eq!(score_goal(&goal("a", true, 7, 2.0, 2.0)), 0.0);
    }

    #[test]
    fn zero_target_counts_as_met() {
        let g = goal("a", true, 0, 4.0, 0.0);
        assert_eq!(completion_ratio(&g), 1.0);
        assert_eq!(score_goal(&g), 0.0);
    }

    #[test]
    fn nan_target_does_not_poison_score() {
        let g = goal("a", true, 0, 1.0, f64::NAN);
        assert!(score_goal(&g).is_finite());
    }

    #[test]
    fn prioritize_drops_inactive_and_sorts_descending() {
        let goals = vec![
            goal("met", true, 0, 3.0, 3.0),
            goal("off", false, 20, 0.0, 3.0),
            goal("streak", true, 5, 0.0, 3.0),
            goal("half", true, 0, 1.5, 3.0),
        ];
        let ids: Vec<&str> = prioritize_goals(&goals)
            .iter()
            .map(|r| r.goal.id.as_str())
            .collect();
        assert_eq!(ids, vec!["streak", "half", "met"]);
    }

    #[test]
    fn ties_keep_source_order() {
        let goals = vec![goal("first", true, 0, 1.0, 2.0), goal("second", true, 0, 1.0, 2.0)];
        assert_eq!(top_goal(&goals).map(|r| r.goal.id.as_str()), Some("first"));
    }

    #[test]
    fn picker_truncates_to_limit() {
        let goals: Vec<Goal> = (0..6).map(|i| goal(&i.to_string(), true, i, 0.0, 1.0)).collect();
        let picker = goal_picker(&goals, 4);
        assert_eq!(picker.len(), 4);
        assert_eq!(picker[0].goal.id, "5");
    }

    #[test]
    fn scoring_is_repeatable() {
        let g = goal("a", true, 2, 0.3, 1.0);
        assert_eq!(score_goal(&g), score_goal(&g));
    }

    fn arb_goal() -> impl Strategy<Value = Goal> {
        (any::<bool>(), 0u32..200, 0.0f64..10.0, 0.0f64..10.0).prop_map(
            |(active, streak, progress, target)| Goal {
                id: "g".to_string(),
                title: "g".to_string(),
                is_active: active,
                current_streak: streak,
                today_progress: progress,
                target_value: target,
            },
        )
    }

    proptest! {
        #[test]
        fn top_goal_is_never_inactive(goals in prop::collection::vec(arb_goal(), 0..20)) {
            if let Some(top) = top_goal(&goals) {
                prop_assert!(top.goal.is_active);
            }
        }

        #[test]
        fn longer_streak_at_risk_scores_higher(streak in 1u32..500, progress in 0.0f64..5.0) {
            let shorter = goal("a", true, streak, progress, 10.0);
            let longer = goal("a", true, streak + 1, progress, 10.0);
            prop_assert!(score_goal(&longer) > score_goal(&shorter));
        }
    }
}
