use rand::Rng;

use crate::models::FocusSelection;
use crate::phrases::{self, GENERAL_NUDGES, URGENCY_PHRASES};

pub const SIGN_OFF: &str = "Your call — no judgment.";

pub fn compose_message<R: Rng + ?Sized>(
    focus_title: Option<&str>,
    assignment_title: Option<&str>,
    assignment_due_display: Option<&str>,
    rng: &mut R,
) -> String {
    let focus_title = focus_title.filter(|t| !t.is_empty());
    let assignment_title = assignment_title.filter(|t| !t.is_empty());
    let mut paragraphs: Vec<String> = Vec::new();

    if let Some(focus) = focus_title {
        paragraphs.push(format!("Remember, you wanted to: \"{focus}\""));
    }

    if let Some(assignment) = assignment_title {
        let due = assignment_due_display
            .filter(|d| !d.is_empty())
            .map(|d| format!(" (due {d})"))
            .unwrap_or_default();
        paragraphs.push(format!(
            "Coming up: {assignment}{due}\n\n{}",
            phrases::pick_random(&URGENCY_PHRASES, rng)
        ));
    }

    if paragraphs.is_empty() {
        paragraphs.push(phrases::pick_random(&GENERAL_NUDGES, rng).to_string());
    }

    paragraphs.push(SIGN_OFF.to_string());
    paragraphs.join("\n\n")
}

pub fn compose_for<R: Rng + ?Sized>(selection: &FocusSelection, rng: &mut R) -> String {
    compose_message(
        selection.focus_title.as_deref(),
        selection.assignment_title.as_deref(),
        selection.assignment_due_display.as_deref(),
        rng,
    )
}

/// Heading chosen by whoever triggers the shield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShieldHeading {
    BeforeYouScroll,
    TimeCheck { limit_minutes: u32 },
}

impl ShieldHeading {
    pub fn title(&self) -> &'static str {
        match self {
            Self::BeforeYouScroll => "Before you scroll...",
            Self::TimeCheck { .. } => "Time check",
        }
    }

    pub fn subtitle(&self, message: &str) -> String {
        match self {
            Self::BeforeYouScroll => message.to_string(),
            Self::TimeCheck { limit_minutes } => {
                format!("You've hit your {limit_minutes}-minute daily limit.\n\n{message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    fn zero_rng() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn empty_selection_uses_general_pool() {
        let mut rng = Pcg64::seed_from_u64(3);
        let message = compose_for(&FocusSelection::default(), &mut rng);
        let body = message
            .strip_suffix("\n\nYour call — no judgment.")
            .expect("sign-off missing");
        assert!(GENERAL_NUDGES.contains(&body));
    }

    #[test]
    fn focus_and_assignment_compose_in_order() {
        let message = compose_message(
            Some("Finish essay"),
            Some("Lab report"),
            Some("DUE TOMORROW"),
            &mut zero_rng(),
        );
        assert_eq!(
            message,
            "Remember, you wanted to: \"Finish essay\"\n\n\
             Coming up: Lab report (due DUE TOMORROW)\n\n\
             This one's coming up soon — you've got this.\n\n\
             Your call — no judgment."
        );
    }

    #[test]
    fn focus_only_has_no_phrase() {
        let message = compose_message(Some("Run 5k"), None, None, &mut zero_rng());
        assert_eq!(
            message,
            "Remember, you wanted to: \"Run 5k\"\n\nYour call — no judgment."
        );
    }

    #[test]
    fn assignment_without_due_omits_parenthetical() {
        let message = compose_message(None, Some("Essay draft"), None, &mut zero_rng());
        assert!(message.starts_with("Coming up: Essay draft\n\n"));
        assert!(!message.contains("(due"));
    }

    #[test]
    fn time_check_prefixes_limit() {
        let heading = ShieldHeading::TimeCheck { limit_minutes: 45 };
        assert_eq!(heading.title(), "Time check");
        assert_eq!(
            heading.subtitle("Body"),
            "You've hit your 45-minute daily limit.\n\nBody"
        );
        assert_eq!(ShieldHeading::BeforeYouScroll.subtitle("Body"), "Body");
    }
}
