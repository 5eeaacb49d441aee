use super::macros::mapped_entity;
use super::model::Tag;
use serde_json::Value;

mapped_entity! {
    /// Blended search over users, hashtags and places
    pub response FbSearchResponse {
        HAS_MORE: Value = "has_more",
        HASHTAGS: Value = "hashtags",
        USERS: Value = "users",
        PLACES: Value = "places",
        RANK_TOKEN: Value = "rank_token",
    }
}

mapped_entity! {
    pub response SearchTagResponse {
        HAS_MORE: Value = "has_more",
        RESULTS: Vec<Tag> = "results",
        RANK_TOKEN: Value = "rank_token",
    }
}
