use super::macros::mapped_entity;
use super::model::Reel;

mapped_entity! {
    pub response ActiveReelAdsResponse {
        REELS: Vec<Reel> = "reels",
        NEXT_MAX_ID: String = "next_max_id",
        MORE_AVAILABLE: bool = "more_available",
    }
}
