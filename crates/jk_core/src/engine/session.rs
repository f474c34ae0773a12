//! Live game-tab state and its pure transitions
//!
//! The session holds what the host UI displays between rounds: both
//! chosen hands, the last outcome, the result banner flag, and the two
//! score counters. It is advanced only through [`SessionState::apply`],
//! a pure `(state, event) -> state` function, so the UI layer owns no
//! game logic of its own.

use serde::{Deserialize, Serialize};

use super::resolve;
use crate::models::{Hand, RoundOutcome};

/// Per-session score counters
///
/// Each finished round increments exactly one counter on a win or a
/// loss; draws change neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub player: u32,
    pub cpu: u32,
}

/// Session transition events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Resolve one round between the given hands
    Play { player: Hand, cpu: Hand },
    /// Return to the initial state (the reset button)
    Reset,
}

/// Serializable game-tab state owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub player_hand: Option<Hand>,
    pub cpu_hand: Option<Hand>,
    pub last_outcome: Option<RoundOutcome>,
    pub show_result: bool,
    pub scores: ScoreBoard,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pure transition: consumes the current state, returns the next one
    pub fn apply(self, event: SessionEvent) -> SessionState {
        match event {
            SessionEvent::Play { player, cpu } => {
                let outcome = resolve(player, cpu);
                let mut scores = self.scores;
                match outcome {
                    RoundOutcome::Win => scores.player += 1,
                    RoundOutcome::Lose => scores.cpu += 1,
                    RoundOutcome::Draw => {}
                }

                SessionState {
                    player_hand: Some(player),
                    cpu_hand: Some(cpu),
                    last_outcome: Some(outcome),
                    show_result: true,
                    scores,
                }
            }
            SessionEvent::Reset => SessionState::default(),
        }
    }
}
