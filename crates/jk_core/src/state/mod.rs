//! Global App State Manager
//!
//! Thread-safe singleton for the live app state. `AppState` holds what
//! both tabs display at runtime and converts to/from `GameSave` for
//! persistence.

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::engine::session::SessionState;
use crate::models::{Item, RoundOutcome};
use crate::save::{GameProgress, GameSave, GameSettings, RoundRecord};

/// Global app state singleton
pub static APP_STATE: Lazy<Arc<RwLock<AppState>>> =
    Lazy::new(|| Arc::new(RwLock::new(AppState::default())));

/// Runtime app state
///
/// Holds the live game-tab session, the item-tab entries, and the
/// persisted counters. Convertible to `GameSave` and restorable from it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live game-tab state
    pub session: SessionState,

    /// Item-tab entries, insertion order
    pub items: Vec<Item>,

    /// Finished rounds, oldest first
    pub round_history: Vec<RoundRecord>,

    /// Cumulative progress counters
    pub progress: GameProgress,

    /// Player preferences
    pub settings: GameSettings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new empty app state
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            items: Vec::new(),
            round_history: Vec::new(),
            progress: GameProgress::default(),
            settings: GameSettings::default(),
        }
    }

    /// Convert runtime state to save format
    pub fn to_save(&self) -> GameSave {
        GameSave {
            version: crate::save::SAVE_VERSION,
            timestamp: crate::save::format::current_timestamp(),
            session: self.session,
            items: self.items.clone(),
            round_history: self.round_history.clone(),
            progress: self.progress.clone(),
            settings: self.settings.clone(),
        }
    }

    /// Restore runtime state from save data
    pub fn from_save(save: &GameSave) -> Self {
        Self {
            session: save.session,
            items: save.items.clone(),
            round_history: save.round_history.clone(),
            progress: save.progress.clone(),
            settings: save.settings.clone(),
        }
    }

    // ========================
    // Item Management
    // ========================

    /// Add a new item with the given timestamp
    pub fn add_item(&mut self, timestamp: DateTime<Utc>) -> Item {
        let item = Item::new(timestamp);
        self.items.push(item.clone());
        item
    }

    /// Remove an item by ID
    pub fn remove_item(&mut self, item_id: &Uuid) -> Option<Item> {
        if let Some(idx) = self.items.iter().position(|i| i.id == *item_id) {
            Some(self.items.remove(idx))
        } else {
            None
        }
    }

    /// Get an item by ID
    pub fn get_item(&self, item_id: &Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == *item_id)
    }

    // ========================
    // Round Recording
    // ========================

    /// Next free round record id
    pub fn next_round_id(&self) -> u32 {
        self.round_history.last().map(|r| r.id + 1).unwrap_or(0)
    }

    /// Record a finished round
    pub fn record_round(&mut self, record: RoundRecord) {
        let outcome = record.outcome;

        self.round_history.push(record);
        self.progress.total_rounds += 1;

        match outcome {
            RoundOutcome::Win => self.progress.stats.wins += 1,
            RoundOutcome::Lose => self.progress.stats.losses += 1,
            RoundOutcome::Draw => self.progress.stats.draws += 1,
        }
    }
}

// ========================
// Global State Access Functions
// ========================

/// Get a read lock on the global app state
pub fn get_state() -> std::sync::RwLockReadGuard<'static, AppState> {
    APP_STATE.read().expect("APP_STATE lock poisoned")
}

/// Get a write lock on the global app state
pub fn get_state_mut() -> std::sync::RwLockWriteGuard<'static, AppState> {
    APP_STATE.write().expect("APP_STATE lock poisoned")
}

/// Reset the global state to default
pub fn reset_state() {
    *APP_STATE.write().expect("APP_STATE lock poisoned") = AppState::new();
}

/// Replace the entire global state
pub fn set_state(new_state: AppState) {
    *APP_STATE.write().expect("APP_STATE lock poisoned") = new_state;
}

// Serializes tests that go through the global singleton
#[cfg(test)]
pub(crate) static GLOBAL_STATE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
