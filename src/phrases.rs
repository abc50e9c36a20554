use rand::seq::SliceRandom;
use rand::Rng;

pub const URGENCY_PHRASES: [&str; 5] = [
    "This one's coming up soon — you've got this.",
    "Due date approaching. A little progress now goes a long way.",
    "Time-sensitive — even 15 minutes would help.",
    "Getting close! Focus here first.",
    "This is the priority right now.",
];

pub const GENERAL_NUDGES: [&str; 5] = [
    "You've been spending a lot of time here.\n\nConsider taking a break or doing something productive.",
    "A quick check-in: is this what you wanted to be doing right now?",
    "Every minute counts. What matters most to you today?",
    "Pause and breathe. What's one thing you could do right now that future you would thank you for?",
    "Scrolling is easy. Growth takes intention. You choose.",
];

/// Returned when a caller hands in an empty pool.
pub const FALLBACK_PHRASE: &str = "A quick check-in: is this what you wanted to be doing right now?";

pub fn pick_random<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool.choose(rng).copied().unwrap_or(FALLBACK_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn empty_pool_yields_fallback() {
        let mut rng = StepRng::new(0, 1);
        assert_eq!(pick_random(&[], &mut rng), FALLBACK_PHRASE);
    }

    #[test]
    fn zero_stream_picks_first_entry() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick_random(&URGENCY_PHRASES, &mut rng), URGENCY_PHRASES[0]);
    }

    #[test]
    fn same_seed_same_phrase() {
        let first = pick_random(&GENERAL_NUDGES, &mut Pcg64::seed_from_u64(7));
        let second = pick_random(&GENERAL_NUDGES, &mut Pcg64::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn picks_stay_inside_pool() {
        let mut rng = Pcg64::seed_from_u64(42);
        for _ in 0..50 {
            assert!(GENERAL_NUDGES.contains(&pick_random(&GENERAL_NUDGES, &mut rng)));
        }
    }
}
