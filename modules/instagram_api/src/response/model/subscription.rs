use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    /// Realtime topic subscription
    pub struct Subscription {
        TOPIC: Value = "topic",
        URL: Value = "url",
        SEQUENCE: Value = "sequence",
        AUTH: Value = "auth",
    }
}
