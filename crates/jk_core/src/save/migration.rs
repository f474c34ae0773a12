use super::error::SaveError;
use super::format::GameSave;
use super::SAVE_VERSION;

use crate::models::RoundOutcome;

/// Migrate save data from older versions to current version
pub fn migrate_save(mut save: GameSave) -> Result<GameSave, SaveError> {
    let original_version = save.version;

    // Apply migrations step by step
    save = match save.version {
        0 => migrate_v0_to_v1(save)?,
        1 => save, // Current version, no migration needed
        v if v > SAVE_VERSION => {
            // Future version - might be compatible
            log::warn!("Loading save from future version {} (current: {})", v, SAVE_VERSION);
            save
        }
        _ => {
            return Err(SaveError::VersionMismatch { found: save.version, expected: SAVE_VERSION });
        }
    };

    // Update to current version
    save.version = SAVE_VERSION;
    save.update_timestamp();

    if original_version != SAVE_VERSION {
        log::info!("Migrated save from version {} to {}", original_version, SAVE_VERSION);
    }

    Ok(save)
}

/// Migrate from version 0 to version 1
fn migrate_v0_to_v1(mut save: GameSave) -> Result<GameSave, SaveError> {
    log::info!("Migrating save from version 0 to 1");

    // 1. Initialize fields that didn't exist in v0
    if save.settings.preferred_language.is_empty() {
        save.settings.preferred_language = "japanese".to_string();
    }

    // 2. Drop items that ended up sharing an id
    let mut seen_ids = std::collections::HashSet::new();
    let before = save.items.len();
    save.items.retain(|item| seen_ids.insert(item.id));
    if save.items.len() != before {
        log::warn!("Dropped {} duplicate item entries", before - save.items.len());
    }

    // 3. A raised result banner needs an outcome behind it
    if save.session.show_result && save.session.last_outcome.is_none() {
        save.session.show_result = false;
    }

    // 4. Recompute progress counters from the round history
    let actual_rounds = save.round_history.len() as u32;
    if save.progress.total_rounds != actual_rounds {
        save.progress.total_rounds = actual_rounds;
    }

    let mut wins = 0;
    let mut losses = 0;
    let mut draws = 0;

    for record in &save.round_history {
        match record.outcome {
            RoundOutcome::Win => wins += 1,
            RoundOutcome::Lose => losses += 1,
            RoundOutcome::Draw => draws += 1,
        }
    }

    save.progress.stats.wins = wins;
    save.progress.stats.losses = losses;
    save.progress.stats.draws = draws;

    Ok(save)
}

/// Check if a save file needs migration
pub fn needs_migration(save: &GameSave) -> bool {
    save.version < SAVE_VERSION
}

/// Get migration description for UI display
pub fn get_migration_description(from_version: u32, to_version: u32) -> String {
    match (from_version, to_version) {
        (0, 1) => "Recomputing score counters and fixing data consistency".to_string(),
        _ => format!("Updating save format from version {} to {}", from_version, to_version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hand, Item};
    use crate::save::format::RoundRecord;

    fn record(id: u32, outcome: RoundOutcome) -> RoundRecord {
        RoundRecord {
            id,
            player_hand: Hand::Rock,
            cpu_hand: Hand::Paper,
            outcome,
            played_at: 1_754_000_000_000,
        }
    }

    #[test]
    fn test_migrate_v0_recomputes_stats_from_history() {
        let mut save = GameSave::new();
        save.version = 0;
        save.settings.preferred_language = "".to_string();
        save.round_history.push(record(0, RoundOutcome::Win));
        save.round_history.push(record(1, RoundOutcome::Win));
        save.round_history.push(record(2, RoundOutcome::Lose));
        save.round_history.push(record(3, RoundOutcome::Draw));
        save.progress.total_rounds = 99; // Inconsistent
        save.progress.stats.wins = 42;

        let migrated = migrate_save(save).unwrap();

        assert_eq!(migrated.version, 1);
        assert_eq!(migrated.settings.preferred_language, "japanese");
        assert_eq!(migrated.progress.total_rounds, 4);
        assert_eq!(migrated.progress.stats.wins, 2);
        assert_eq!(migrated.progress.stats.losses, 1);
        assert_eq!(migrated.progress.stats.draws, 1);
    }

    #[test]
    fn test_migrate_v0_drops_duplicate_items_and_dangling_banner() {
        let mut save = GameSave::new();
        save.version = 0;
        let item = Item::now();
        save.items.push(item.clone());
        save.items.push(item);
        save.items.push(Item::now());
        save.session.show_result = true; // No outcome behind it

        let migrated = migrate_save(save).unwrap();

        assert_eq!(migrated.items.len(), 2);
        assert!(!migrated.session.show_result);
    }

    #[test]
    fn test_no_migration_needed() {
        let save = GameSave::new(); // Already current version

        let result = migrate_save(save.clone()).unwrap();

        assert_eq!(result.version, save.version);
    }

    #[test]
    fn test_future_version_warning() {
        let mut save = GameSave::new();
        save.version = 999; // Future version

        let result = migrate_save(save);
        assert!(result.is_ok());
    }
}
