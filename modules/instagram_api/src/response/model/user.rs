use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    pub struct User {
        PK: String = "pk",
        USERNAME: String = "username",
        FULL_NAME: String = "full_name",
        IS_PRIVATE: bool = "is_private",
        IS_VERIFIED: bool = "is_verified",
        PROFILE_PIC_URL: String = "profile_pic_url",
        FRIENDSHIP_STATUS: FriendshipStatus = "friendship_status",
    }
}

mapped_entity! {
    /// Relationship between the logged-in account and another user
    pub struct FriendshipStatus {
        FOLLOWING: bool = "following",
        FOLLOWED_BY: bool = "followed_by",
        BLOCKING: bool = "blocking",
        MUTING: bool = "muting",
        IS_PRIVATE: bool = "is_private",
        INCOMING_REQUEST: bool = "incoming_request",
        OUTGOING_REQUEST: bool = "outgoing_request",
        IS_BESTIE: bool = "is_bestie",
    }
}

mapped_entity! {
    pub struct Suggestion {
        USER: User = "user",
        ALGORITHM: Value = "algorithm",
        SOCIAL_CONTEXT: Value = "social_context",
        CAPTION: Value = "caption",
        UUID: Value = "uuid",
        VALUE: f64 = "value",
        IS_NEW_SUGGESTION: bool = "is_new_suggestion",
    }
}

mapped_entity! {
    /// "Suggested for you" feed unit
    pub struct SuggestedUsers {
        ID: String = "id",
        VIEW_ALL_TEXT: Value = "view_all_text",
        TITLE: Value = "title",
        // upstream spelling
        AUTO_DVANCE: Value = "auto_dvance",
        TYPE: Value = "type",
        TRACKING_TOKEN: Value = "tracking_token",
        LANDING_SITE_TYPE: Value = "landing_site_type",
        LANDING_SITE_TITLE: Value = "landing_site_title",
        UPSELL_FB_POS: Value = "upsell_fb_pos",
        SUGGESTIONS: Vec<Suggestion> = "suggestions",
        NETEGO_TYPE: Value = "netego_type",
    }
}
