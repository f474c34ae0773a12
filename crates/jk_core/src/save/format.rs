use super::error::SaveError;
use super::SAVE_VERSION;
use crate::engine::session::SessionState;
use crate::models::{Hand, Item, RoundOutcome};
use serde::{Deserialize, Serialize};

use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use rmp_serde::{from_slice, to_vec_named};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

const MAX_ITEMS: usize = 10_000;
const MAX_ROUND_HISTORY: usize = 100_000;

/// Main save structure with all persistent data
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GameSave {
    /// Save format version for migration
    pub version: u32,

    /// Save timestamp (unix milliseconds)
    pub timestamp: u64,

    /// Live game-tab state at save time
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

impl Default for GameSave {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSave {
    pub fn new() -> Self {
        Self {
            version: SAVE_VERSION,
            timestamp: current_timestamp(),
            session: SessionState::new(),
            items: Vec::new(),
            round_history: Vec::new(),
            progress: GameProgress::default(),
            settings: GameSettings::default(),
        }
    }

    pub fn update_timestamp(&mut self) {
        self.timestamp = current_timestamp();
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.items.len() > MAX_ITEMS {
            return Err(SaveError::DataTooLarge { size: self.items.len() });
        }

        if self.round_history.len() > MAX_ROUND_HISTORY {
            return Err(SaveError::DataTooLarge { size: self.round_history.len() });
        }

        // Check for duplicate item IDs
        let mut item_ids = std::collections::HashSet::new();
        for item in &self.items {
            if !item_ids.insert(&item.id) {
                return Err(SaveError::Corrupted);
            }
        }

        Ok(())
    }
}

/// One finished round, as persisted in the history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub id: u32,
    pub player_hand: Hand,
    pub cpu_hand: Hand,
    pub outcome: RoundOutcome,
    pub played_at: u64, // timestamp
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GameProgress {
    /// Total rounds played across all sessions
    pub total_rounds: u32,

    /// Lifetime outcome counters
    pub stats: ScoreStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreStats {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Auto-save enabled
    pub auto_save: bool,

    /// Auto-save interval (minutes)
    pub auto_save_interval: u32,

    /// Language preference for display strings
    pub preferred_language: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self { auto_save: true, auto_save_interval: 5, preferred_language: "japanese".to_string() }
    }
}

/// Serialize and compress save data
pub fn serialize_and_compress(save: &GameSave) -> Result<Vec<u8>, SaveError> {
    // Validate before serialization
    save.validate()?;

    // 1. Serialize to MessagePack with field names
    let msgpack = to_vec_named(save).map_err(SaveError::Serialization)?;

    // 2. Compress with LZ4 (size prepended for easy decompression)
    let compressed = compress_prepend_size(&msgpack);

    // 3. Add SHA256 checksum at the end
    let mut hasher = Sha256::new();
    hasher.update(&compressed);
    let checksum = hasher.finalize();

    let mut result = compressed;
    result.extend_from_slice(&checksum);

    Ok(result)
}

/// Decompress and deserialize save data
pub fn decompress_and_deserialize(bytes: &[u8]) -> Result<GameSave, SaveError> {
    // Check minimum size (header + checksum)
    if bytes.len() < 4 + 32 {
        return Err(SaveError::Corrupted);
    }

    // Split payload and checksum
    let (payload, checksum_bytes) = bytes.split_at(bytes.len() - 32);

    // Verify checksum
    let mut hasher = Sha256::new();
    hasher.update(payload);
    let calculated_checksum = hasher.finalize();

    if &calculated_checksum[..] != checksum_bytes {
        return Err(SaveError::ChecksumMismatch);
    }

    // Decompress
    let msgpack = decompress_size_prepended(payload).map_err(|_| SaveError::Decompression)?;

    // Deserialize
    let save: GameSave = from_slice(&msgpack).map_err(SaveError::Deserialization)?;

    // Validate version
    if save.version > SAVE_VERSION {
        return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
    }

    Ok(save)
}

pub fn current_timestamp() -> u64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as u64
}
