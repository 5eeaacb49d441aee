use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    /// Server notice attached to a response under `_messages`
    pub struct Message {
        KEY: Value = "key",
        TIME: Value = "time",
    }
}
