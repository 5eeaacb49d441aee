use super::User;
use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    pub struct Reel {
        ID: String = "id",
        ITEMS: Value = "items",
        USER: User = "user",
        EXPIRING_AT: Value = "expiring_at",
        SEEN: Value = "seen",
        LATEST_REEL_MEDIA: Value = "latest_reel_media",
        RANKED_POSITION: Value = "ranked_position",
    }
}
