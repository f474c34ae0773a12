pub mod game_json;
pub mod items_json;

pub use game_json::{
    get_session_json, play_round_json, reset_session_json, PlayRoundRequest, PlayRoundResponse,
    SessionResponse,
};
pub use items_json::{
    add_item_json, delete_item_json, list_items_json, AddItemRequest, DeleteItemRequest,
    ItemListResponse, ItemResponse,
};
