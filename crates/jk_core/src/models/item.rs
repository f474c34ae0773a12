use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamped list entry
///
/// Identity is the id; the timestamp is display data. Entries are freely
/// insertable and removable by id, with no further semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
}

impl Item {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self { id: Uuid::new_v4(), timestamp }
    }

    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Numeric date + standard time, e.g. "2025/08/03 14:03:59"
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%Y/%m/%d %H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_items_get_distinct_ids() {
        let a = Item::now();
        let b = Item::now();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_display_timestamp_format() {
        let ts = Utc.with_ymd_and_hms(2025, 8, 3, 14, 3, 59).unwrap();
        let item = Item::new(ts);
        assert_eq!(item.display_timestamp(), "2025/08/03 14:03:59");
    }

    #[test]
    fn test_serde_roundtrip() {
        let item = Item::now();
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
