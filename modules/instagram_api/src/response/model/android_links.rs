use crate::response::macros::mapped_entity;

mapped_entity! {
    /// Deep-link targets of an ad call to action. Fields arrive in camelCase.
    pub struct AndroidLinks {
        LINK_TYPE: serde_json::Value = "linkType",
        WEB_URI: serde_json::Value = "webUri",
        ANDROID_CLASS: serde_json::Value = "androidClass",
        PACKAGE: serde_json::Value = "package",
        DEEPLINK_URI: serde_json::Value = "deeplinkUri",
        CALL_TO_ACTION_TITLE: serde_json::Value = "callToActionTitle",
        REDIRECT_URI: serde_json::Value = "redirectUri",
    }
}
