//! Round resolution engine
//!
//! `resolve` is the whole decision core of the game: a pure, total function
//! over the nine ordered hand pairs. `RoundEngine` wraps it with a seeded
//! generator so the host can replay a round deterministically (same seed =
//! same CPU hand).

pub mod session;

pub use session::{ScoreBoard, SessionEvent, SessionState};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::models::{Hand, RoundOutcome};

/// Decide a round under the standard beats-relation.
///
/// Equal hands always draw; otherwise rock beats scissors, paper beats
/// rock, scissors beats paper. Total over all nine input pairs, no error
/// path.
pub fn resolve(player: Hand, opponent: Hand) -> RoundOutcome {
    if player == opponent {
        return RoundOutcome::Draw;
    }

    if player.beats() == opponent {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}

/// One resolved round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub player_hand: Hand,
    pub cpu_hand: Hand,
    pub outcome: RoundOutcome,
}

/// Seeded CPU hand generator
pub struct RoundEngine {
    rng: ChaCha8Rng,
}

impl RoundEngine {
    pub fn new(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from the three hands, independent across calls
    pub fn draw(&mut self) -> Hand {
        Hand::random_with(&mut self.rng)
    }

    /// Play one round against a drawn CPU hand
    pub fn play(&mut self, player: Hand) -> RoundResult {
        let cpu = self.draw();
        RoundResult { player_hand: player, cpu_hand: cpu, outcome: resolve(player, cpu) }
    }
}


#[cfg(all(test, feature = "proptest"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_hand() -> impl Strategy<Value = Hand> {
        prop_oneof![Just(Hand::Rock), Just(Hand::Paper), Just(Hand::Scissors)]
    }

    proptest! {
        /// Property: identical hands always draw
        #[test]
        fn prop_diagonal_draws(hand in any_hand()) {
            prop_assert_eq!(resolve(hand, hand), RoundOutcome::Draw);
        }

        /// Property: swapping the arguments inverts the outcome
        #[test]
        fn prop_antisymmetry(a in any_hand(), b in any_hand()) {
            prop_assert_eq!(resolve(b, a), resolve(a, b).invert());
        }

        /// Property: distinct hands never draw, and exactly one side wins
        #[test]
        fn prop_distinct_hands_decide(a in any_hand(), b in any_hand()) {
            prop_assume!(a != b);
            let forward = resolve(a, b);
            let backward = resolve(b, a);
            prop_assert!(forward != RoundOutcome::Draw);
            prop_assert!(
                (forward == RoundOutcome::Win) != (backward == RoundOutcome::Win)
            );
        }
    }
}
