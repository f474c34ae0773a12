// Game tab JSON API layer
// Connects the host UI to the janken round engine

use serde::{Deserialize, Serialize};

use crate::engine::session::SessionState;
use crate::engine::{resolve, RoundEngine, SessionEvent};
use crate::models::{Hand, RoundOutcome};
use crate::save::format::current_timestamp;
use crate::save::RoundRecord;
use crate::state;

// ========== Request/Response Structures ==========

#[derive(Debug, Deserialize)]
pub struct PlayRoundRequest {
    pub schema_version: u8,
    /// "rock" | "paper" | "scissors"
    pub player_hand: String,
    /// Fixed CPU seed (same seed = same CPU hand); clock-derived when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayRoundResponse {
    pub schema_version: u8,
    pub player_hand: Hand,
    pub cpu_hand: Hand,
    pub outcome: RoundOutcome,
    /// Result banner text for the host UI
    pub result_text: String,
    pub player_score: u32,
    pub cpu_score: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: Option<SessionState>,
    pub error: Option<String>,
}

// ========== Public API Functions ==========

/// Main entry point for the game tab - plays one round from a JSON request
pub fn play_round_json(request_json: &str) -> Result<String, String> {
    // Parse request
    let request: PlayRoundRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    // Validate schema version
    if request.schema_version != crate::SCHEMA_VERSION {
        return Err(format!("Unsupported schema version: {}", request.schema_version));
    }

    let player = Hand::parse(&request.player_hand).map_err(|e| e.to_string())?;

    let seed = request.seed.unwrap_or_else(|| {
        std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH).unwrap().as_secs()
    });
    let mut engine = RoundEngine::new(seed);
    let cpu = engine.draw();
    let outcome = resolve(player, cpu);

    let mut app = state::get_state_mut();
    app.session = app.session.apply(SessionEvent::Play { player, cpu });

    let id = app.next_round_id();
    app.record_round(RoundRecord {
        id,
        player_hand: player,
        cpu_hand: cpu,
        outcome,
        played_at: current_timestamp(),
    });

    let response = PlayRoundResponse {
        schema_version: crate::SCHEMA_VERSION,
        player_hand: player,
        cpu_hand: cpu,
        outcome,
        result_text: outcome.display_text().to_string(),
        player_score: app.session.scores.player,
        cpu_score: app.session.scores.cpu,
    };
    drop(app);

    log::debug!("Round played: {:?} vs {:?} -> {:?}", player, cpu, outcome);

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}

/// Reset the game tab (the reset button): hands cleared, scores zeroed
pub fn reset_session_json() -> String {
    let mut app = state::get_state_mut();
    app.session = app.session.apply(SessionEvent::Reset);
    let session = app.session;
    drop(app);

    serde_json::to_string(&SessionResponse { success: true, session: Some(session), error: None })
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

/// Current game tab snapshot
pub fn get_session_json() -> String {
    let session = state::get_state().session;

    serde_json::to_string(&SessionResponse { success: true, session: Some(session), error: None })
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GLOBAL_STATE_TEST_LOCK;
    use serde_json::json;

    fn lock_and_reset() -> std::sync::MutexGuard<'static, ()> {
        let guard =
            GLOBAL_STATE_TEST_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        state::reset_state();
        guard
    }

    #[test]
    fn test_play_round_roundtrip() {
        let _guard = lock_and_reset();

        let request = json!({
            "schema_version": 1,
            "player_hand": "rock",
            "seed": 42
        });

        let response_json = play_round_json(&request.to_string()).unwrap();
        let response: PlayRoundResponse = serde_json::from_str(&response_json).unwrap();

        assert_eq!(response.schema_version, 1);
        assert_eq!(response.player_hand, Hand::Rock);
        assert_eq!(response.outcome, resolve(response.player_hand, response.cpu_hand));
        assert_eq!(response.result_text, response.outcome.display_text());

        let app = state::get_state();
        assert_eq!(app.round_history.len(), 1);
        assert_eq!(app.progress.total_rounds, 1);
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let _guard = lock_and_reset();

        let request = json!({
            "schema_version": 1,
            "player_hand": "paper",
            "seed": 7
        })
        .to_string();

        let first: PlayRoundResponse =
            serde_json::from_str(&play_round_json(&request).unwrap()).unwrap();
        let second: PlayRoundResponse =
            serde_json::from_str(&play_round_json(&request).unwrap()).unwrap();

        assert_eq!(first.cpu_hand, second.cpu_hand);
        assert_eq!(first.outcome, second.outcome);
    }

    #[test]
    fn test_scores_accumulate_and_reset() {
        let _guard = lock_and_reset();

        // Seed 42's first draw loses to some fixed hand; play both ways to move a counter
        for hand in ["rock", "paper", "scissors"] {
            let request = json!({
                "schema_version": 1,
                "player_hand": hand,
                "seed": 42
            });
            play_round_json(&request.to_string()).unwrap();
        }

        let app = state::get_state();
        let scores = app.session.scores;
        drop(app);
        // Against a fixed CPU hand, the three player hands produce exactly
        // one win, one loss, and one draw
        assert_eq!(scores.player, 1);
        assert_eq!(scores.cpu, 1);

        let reset: SessionResponse = serde_json::from_str(&reset_session_json()).unwrap();
        assert!(reset.success);
        let session = reset.session.unwrap();
        assert_eq!(session.scores.player, 0);
        assert_eq!(session.scores.cpu, 0);
        assert_eq!(session.player_hand, None);

        // Lifetime counters survive the session reset
        assert_eq!(state::get_state().progress.total_rounds, 3);
    }

    #[test]
    fn test_bad_requests_rejected() {
        let _guard = lock_and_reset();

        assert!(play_round_json("not json").is_err());

        let bad_version = json!({ "schema_version": 9, "player_hand": "rock" });
        let err = play_round_json(&bad_version.to_string()).unwrap_err();
        assert!(err.contains("schema version"));

        let bad_hand = json!({ "schema_version": 1, "player_hand": "lizard" });
        let err = play_round_json(&bad_hand.to_string()).unwrap_err();
        assert!(err.contains("unknown hand"));

        // Nothing was recorded
        assert_eq!(state::get_state().round_history.len(), 0);
    }

    #[test]
    fn test_get_session_snapshot() {
        let _guard = lock_and_reset();

        let response: SessionResponse = serde_json::from_str(&get_session_json()).unwrap();
        assert!(response.success);
        assert_eq!(response.session.unwrap(), SessionState::default());
    }
}
