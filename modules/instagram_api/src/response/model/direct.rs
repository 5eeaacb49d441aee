use super::User;
use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    /// A direct message conversation
    pub struct DirectThread {
        NAMED: Value = "named",
        USERS: Vec<User> = "users",
        HAS_NEWER: Value = "has_newer",
        VIEWER_ID: String = "viewer_id",
        THREAD_ID: String = "thread_id",
        LAST_ACTIVITY_AT: Value = "last_activity_at",
        NEWEST_CURSOR: Value = "newest_cursor",
        IS_SPAM: Value = "is_spam",
        HAS_OLDER: Value = "has_older",
        OLDEST_CURSOR: Value = "oldest_cursor",
        LEFT_USERS: Vec<User> = "left_users",
        MUTED: Value = "muted",
        ITEMS: Vec<DirectThreadItem> = "items",
        THREAD_TYPE: Value = "thread_type",
        THREAD_TITLE: Value = "thread_title",
        CANONICAL: Value = "canonical",
        INVITER: User = "inviter",
        PENDING: Value = "pending",
        LAST_SEEN_AT: Vec<DirectThreadLastSeenAt> = "last_seen_at",
        UNSEEN_COUNT: Value = "unseen_count",
        ACTION_BADGE: ActionBadge = "action_badge",
        LAST_ACTIVITY_AT_SECS: Value = "last_activity_at_secs",
        LAST_PERMANENT_ITEM: PermanentItem = "last_permanent_item",
        IS_PIN: Value = "is_pin",
    }
}

mapped_entity! {
    pub struct DirectThreadItem {
        ITEM_ID: String = "item_id",
        ITEM_TYPE: Value = "item_type",
        USER_ID: String = "user_id",
        TIMESTAMP: Value = "timestamp",
        TEXT: Value = "text",
        CLIENT_CONTEXT: Value = "client_context",
    }
}

mapped_entity! {
    pub struct DirectThreadLastSeenAt {
        ITEM_ID: String = "item_id",
        TIMESTAMP: Value = "timestamp",
    }
}

mapped_entity! {
    pub struct ActionBadge {
        ACTION_TYPE: Value = "action_type",
        ACTION_COUNT: Value = "action_count",
        ACTION_TIMESTAMP: Value = "action_timestamp",
    }
}

mapped_entity! {
    /// Last item of a thread that was not unsent
    pub struct PermanentItem {
        ITEM_ID: String = "item_id",
        USER_ID: String = "user_id",
        TIMESTAMP: Value = "timestamp",
        ITEM_TYPE: Value = "item_type",
        TEXT: Value = "text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::MappedEntity;
    use serde_json::json;

    fn thread() -> DirectThread {
        DirectThread::from_value(json!({
            "thread_id": "340282366841710300949128114477310087005",
            "viewer_id": 1234,
            "users": [{"pk": 1, "username": "a"}, {"pk": 2, "username": "b"}],
            "items": [{"item_id": 29, "item_type": "text", "text": "hi"}],
            "action_badge": {"action_type": 1},
            "is_spam": false,
            "thread_v2_id": "1234567890",
        }))
    }

    #[test]
    fn nested_lists_are_typed() {
        let thread = thread();
        let users = thread.get(DirectThread::USERS).unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].get(User::USERNAME).as_deref(), Some("b"));

        let items = thread.get(DirectThread::ITEMS).unwrap();
        assert_eq!(items[0].get(DirectThreadItem::ITEM_ID).as_deref(), Some("29"));
        assert_eq!(thread.get(DirectThread::VIEWER_ID).as_deref(), Some("1234"));
    }

    #[test]
    fn malformed_list_entries_do_not_hide_the_rest() {
        let thread = DirectThread::from_value(json!({
            "users": [1, {"pk": 2, "username": "b"}],
        }));

        let users = thread.get(DirectThread::USERS).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get(User::USERNAME).as_deref(), Some("b"));
        assert_eq!(thread.raw("users").unwrap()[0], json!(1));
    }

    #[test]
    fn absent_fields_read_as_none() {
        let thread = thread();
        assert_eq!(thread.get(DirectThread::INVITER), None);
        assert!(!thread.has(DirectThread::INVITER));
        assert!(thread.has(DirectThread::IS_SPAM));
        assert!(!thread.is(DirectThread::IS_SPAM));
    }

    #[test]
    fn unknown_fields_survive_serialization() {
        let value = serde_json::to_value(thread()).unwrap();
        assert_eq!(value["thread_v2_id"], json!("1234567890"));

        let back: DirectThread = serde_json::from_value(value).unwrap();
        assert_eq!(back, thread());
    }
}
