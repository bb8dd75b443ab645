use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform [0, 100) rolls the engine consumes for
/// accuracy checks and status infliction chances.
///
/// Every call that needs randomness takes one of these explicitly; the
/// engine never reaches for a process-wide source. Scripted instances
/// make tests deterministic, seeded instances make whole battles
/// replayable.
#[derive(Debug, Clone)]
pub enum TurnRng {
    /// Fixed outcome list for tests. Exhausting it panics with the
    /// caller's reason string so the failing draw is easy to locate.
    Scripted { outcomes: Vec<u8>, index: usize },
    /// Live generator, seeded or from OS entropy.
    Live(StdRng),
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        TurnRng::Scripted { outcomes, index: 0 }
    }

    pub fn new_seeded(seed: u64) -> Self {
        TurnRng::Live(StdRng::seed_from_u64(seed))
    }

    pub fn new_random() -> Self {
        TurnRng::Live(StdRng::from_os_rng())
    }

    /// Next roll in [0, 100). `reason` names what the roll decides.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        match self {
            TurnRng::Scripted { outcomes, index } => {
                if *index >= outcomes.len() {
                    panic!(
                        "TurnRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                        reason
                    );
                }
                let outcome = outcomes[*index];
                *index += 1;
                outcome
            }
            TurnRng::Live(rng) => rng.random_range(0..100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_values_come_back_in_order() {
        let mut rng = TurnRng::new_for_test(vec![10, 99, 0]);
        assert_eq!(rng.next_outcome("first"), 10);
        assert_eq!(rng.next_outcome("second"), 99);
        assert_eq!(rng.next_outcome("third"), 0);
    }

    #[test]
    #[should_panic(expected = "TurnRng exhausted")]
    fn test_scripted_exhaustion_panics_with_reason() {
        let mut rng = TurnRng::new_for_test(vec![]);
        rng.next_outcome("accuracy check");
    }

    #[test]
    fn test_seeded_streams_are_reproducible() {
        let mut a = TurnRng::new_seeded(1234);
        let mut b = TurnRng::new_seeded(1234);
        for _ in 0..50 {
            let (x, y) = (a.next_outcome("probe"), b.next_outcome("probe"));
            assert_eq!(x, y);
            assert!(x < 100);
        }
    }
}
