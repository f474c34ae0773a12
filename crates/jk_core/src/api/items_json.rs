// Item list JSON API layer
// Connects the host UI's list tab to the item store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::Item;
use crate::state;

// ========== Request/Response Structures ==========

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Unix milliseconds; current time when absent
    #[serde(default)]
    pub timestamp_ms: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteItemRequest {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemResponse {
    pub success: bool,
    pub item: Option<Item>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub success: bool,
    pub items: Vec<Item>,
    pub total_count: usize,
    pub error: Option<String>,
}

fn item_error(message: String) -> String {
    serde_json::to_string(&ItemResponse { success: false, item: None, error: Some(message) })
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

fn parse_timestamp(ms: Option<i64>) -> Result<DateTime<Utc>, CoreError> {
    match ms {
        None => Ok(Utc::now()),
        Some(ms) => DateTime::<Utc>::from_timestamp_millis(ms)
            .ok_or_else(|| CoreError::InvalidParameter(format!("timestamp out of range: {}", ms))),
    }
}

// ========== Public API Functions ==========

/// Add a timestamped item (the "+" toolbar button)
pub fn add_item_json(request_json: &str) -> String {
    let request: AddItemRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return item_error(format!("Invalid request format: {}", e)),
    };

    let timestamp = match parse_timestamp(request.timestamp_ms) {
        Ok(ts) => ts,
        Err(e) => return item_error(e.to_string()),
    };

    let item = state::get_state_mut().add_item(timestamp);
    log::debug!("Added item {} at {}", item.id, item.display_timestamp());

    serde_json::to_string(&ItemResponse { success: true, item: Some(item), error: None })
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}

/// Delete an item by id (swipe-to-delete)
pub fn delete_item_json(request_json: &str) -> String {
    let request: DeleteItemRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => return item_error(format!("Invalid request format: {}", e)),
    };

    match state::get_state_mut().remove_item(&request.id) {
        Some(item) => {
            log::debug!("Deleted item {}", item.id);
            serde_json::to_string(&ItemResponse { success: true, item: Some(item), error: None })
                .unwrap_or_else(|_| {
                    r#"{"success":false,"error":"Serialization failed"}"#.to_string()
                })
        }
        None => item_error(CoreError::NotFound(format!("item {}", request.id)).to_string()),
    }
}

/// All items in insertion order
pub fn list_items_json() -> String {
    let items = state::get_state().items.clone();
    let total_count = items.len();

    serde_json::to_string(&ItemListResponse { success: true, items, total_count, error: None })
        .unwrap_or_else(|_| r#"{"success":false,"error":"Serialization failed"}"#.to_string())
}
