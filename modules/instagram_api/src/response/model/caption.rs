use super::User;
use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    /// Media caption, stored as the media's first comment
    pub struct Caption {
        STATUS: Value = "status",
        USER_ID: String = "user_id",
        CREATED_AT_UTC: Value = "created_at_utc",
        CREATED_AT: Value = "created_at",
        BIT_FLAGS: Value = "bit_flags",
        USER: User = "user",
        CONTENT_TYPE: Value = "content_type",
        TEXT: Value = "text",
        MEDIA_ID: String = "media_id",
        PK: String = "pk",
        TYPE: Value = "type",
        HAS_TRANSLATION: Value = "has_translation",
        DID_REPORT_AS_SPAM: Value = "did_report_as_spam",
    }
}
