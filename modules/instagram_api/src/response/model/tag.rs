use crate::response::macros::mapped_entity;
use serde_json::Value;

mapped_entity! {
    /// A hashtag
    pub struct Tag {
        ID: String = "id",
        NAME: String = "name",
        MEDIA_COUNT: i64 = "media_count",
    }
}

mapped_entity! {
    pub struct TagMedia {
        MEDIA: Value = "media",
    }
}

mapped_entity! {
    pub struct ExploreItemInfo {
        NUM_COLUMNS: i64 = "num_columns",
        TOTAL_NUM_COLUMNS: i64 = "total_num_columns",
        ASPECT_RATIO: f64 = "aspect_ratio",
        AUTOPLAY: bool = "autoplay",
    }
}

mapped_entity! {
    /// Content block of a hashtag feed layout
    pub struct TagLayoutContent {
        RELATED_STYLE: String = "related_style",
        RELATED: Vec<Tag> = "related",
        MEDIAS: Vec<TagMedia> = "medias",
        FEED_TYPE: String = "feed_type",
        EXPLORE_ITEM_INFO: ExploreItemInfo = "explore_item_info",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::MappedEntity;
    use serde_json::json;

    #[test]
    fn scalars_are_coerced_to_their_declared_type() {
        let content = TagLayoutContent::from_value(json!({
            "related_style": "pill",
            "related": [{"id": 17841562498105353_u64, "name": "rust", "media_count": "42"}],
            "explore_item_info": {"num_columns": 3, "aspect_ratio": "1", "autoplay": 0},
        }));

        let related = content.get(TagLayoutContent::RELATED).unwrap();
        assert_eq!(related[0].get(Tag::ID).as_deref(), Some("17841562498105353"));
        assert_eq!(related[0].get(Tag::MEDIA_COUNT), Some(42));

        let info = content.get(TagLayoutContent::EXPLORE_ITEM_INFO).unwrap();
        assert_eq!(info.get(ExploreItemInfo::NUM_COLUMNS), Some(3));
        assert_eq!(info.get(ExploreItemInfo::ASPECT_RATIO), Some(1.0));
        assert_eq!(info.get(ExploreItemInfo::AUTOPLAY), Some(false));
        assert_eq!(info.raw("autoplay"), Some(&json!(false)));
    }

    #[test]
    fn setters_chain() {
        let mut tag = Tag::default();
        tag.set(Tag::NAME, "rust".to_string())
            .set(Tag::MEDIA_COUNT, 7)
            .unset(Tag::ID);

        assert_eq!(tag.to_value(), json!({"name": "rust", "media_count": 7}));
    }
}
