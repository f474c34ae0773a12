//! # jk_core - Janken Demo Game Core
//!
//! Platform-neutral core for the two-tab janken demo app: rock-paper-scissors
//! round resolution with score tracking, a timestamped item list, and a
//! versioned save system, exposed to the host UI through a JSON API.
//!
//! ## Features
//! - Pure, total round resolver over an exhaustive hand enum
//! - Deterministic CPU draws (same seed = same hand)
//! - MessagePack + LZ4 save files with integrity checks
//! - JSON API for easy host integration

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod state;

// Re-export main API functions
pub use api::{
    add_item_json, delete_item_json, get_session_json, list_items_json, play_round_json,
    reset_session_json,
};

pub use error::{CoreError, Result};

// Re-export game core types
pub use engine::{resolve, RoundEngine, RoundResult, ScoreBoard, SessionEvent, SessionState};
pub use models::{Hand, Item, RoundOutcome};

// Re-export save system
pub use save::{GameProgress, GameSave, GameSettings, RoundRecord, SaveError, SaveManager};

// Re-export state management
pub use state::{get_state, get_state_mut, reset_state, set_state, AppState, APP_STATE};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
