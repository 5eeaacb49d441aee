use super::macros::mapped_entity;
use super::model::FriendshipStatus;
use super::MappedEntity;
use std::collections::BTreeMap;

mapped_entity! {
    /// `friendships/show_many/`: statuses keyed by user id
    pub response FriendshipsShowManyResponse {
        FRIENDSHIP_STATUSES: BTreeMap<String, FriendshipStatus> = "friendship_statuses",
    }
}

impl FriendshipsShowManyResponse {
    /// Status towards a single user
    pub fn status_for(&self, user_id: &str) -> Option<FriendshipStatus> {
        self.get(Self::FRIENDSHIP_STATUSES)?.remove(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::ApiResponse;
    use serde_json::json;

    #[test]
    fn statuses_are_keyed_by_user_id() {
        let response = FriendshipsShowManyResponse::from_json_str(
            r#"{"friendship_statuses":{"1":{"following":1,"is_bestie":false},"2":{"following":false}},"status":"ok"}"#,
        )
        .unwrap();

        assert!(response.is_ok());
        let first = response.status_for("1").unwrap();
        assert_eq!(first.get(FriendshipStatus::FOLLOWING), Some(true));
        assert_eq!(first.raw("following"), Some(&json!(true)));
        assert!(response.status_for("3").is_none());
    }
}
