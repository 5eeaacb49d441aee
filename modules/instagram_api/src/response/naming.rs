//! Accessor naming for mapped properties
//!
//! A JSON field `user_id` is exposed through the accessors `getUserId`,
//! `isUserId`, `setUserId` and `unsetUserId`.

/// Convert a JSON field name into its accessor name.
///
/// One leading underscore is dropped, the remaining name is split on `_`
/// and each segment's first character is upper-cased. Digits and existing
/// capitals are kept as-is: `_messages` becomes `Messages`, `android_links`
/// becomes `AndroidLinks` and `has_2fa` becomes `Has2fa`.
pub fn accessor_name(field: &str) -> String {
    let field = field.strip_prefix('_').unwrap_or(field);
    field.split('_').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// What an accessor does with its property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Get,
    Is,
    Set,
    Unset,
}

impl AccessorKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AccessorKind::Get => "get",
            AccessorKind::Is => "is",
            AccessorKind::Set => "set",
            AccessorKind::Unset => "unset",
        }
    }
}

/// A parsed accessor call such as `getUserId`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub kind: AccessorKind,
    /// Accessor name of the addressed property, e.g. `UserId`
    pub property: String,
}

impl Accessor {
    /// Split an accessor into its verb and property name
    pub fn parse(accessor: &str) -> Option<Self> {
        // unset must be tried before set
        [
            AccessorKind::Unset,
            AccessorKind::Get,
            AccessorKind::Set,
            AccessorKind::Is,
        ]
        .into_iter()
        .find_map(|kind| {
            let property = accessor.strip_prefix(kind.prefix())?;
            property
                .starts_with(|c: char| !c.is_lowercase())
                .then(|| Accessor {
                    kind,
                    property: property.to_string(),
                })
        })
    }

    pub fn new(kind: AccessorKind, field: &str) -> Self {
        Self {
            kind,
            property: accessor_name(field),
        }
    }
}

impl std::fmt::Display for Accessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_snake_case_fields() {
        assert_eq!(accessor_name("user_id"), "UserId");
        assert_eq!(accessor_name("bit_flags"), "BitFlags");
        assert_eq!(accessor_name("_messages"), "Messages");
        assert_eq!(accessor_name("pk"), "Pk");
    }

    #[test]
    fn keeps_existing_capitals_and_digits() {
        assert_eq!(accessor_name("androidLinks"), "AndroidLinks");
        assert_eq!(accessor_name("has_2fa"), "Has2fa");
        assert_eq!(accessor_name("deeplinkUri"), "DeeplinkUri");
    }

    #[test]
    fn parses_each_verb() {
        assert_eq!(
            Accessor::parse("getUserId"),
            Some(Accessor::new(AccessorKind::Get, "user_id"))
        );
        assert_eq!(
            Accessor::parse("isSpam").map(|a| a.kind),
            Some(AccessorKind::Is)
        );
        assert_eq!(
            Accessor::parse("setText").map(|a| a.kind),
            Some(AccessorKind::Set)
        );
        assert_eq!(
            Accessor::parse("unsetText").map(|a| a.kind),
            Some(AccessorKind::Unset)
        );
    }

    #[test]
    fn rejects_non_accessors() {
        assert_eq!(Accessor::parse("get"), None);
        assert_eq!(Accessor::parse("settle"), None);
        assert_eq!(Accessor::parse("issue"), None);
        assert_eq!(Accessor::parse("fetchUser"), None);
    }

    #[test]
    fn displays_the_call_name() {
        assert_eq!(
            Accessor::new(AccessorKind::Unset, "_messages").to_string(),
            "unsetMessages"
        );
    }
}
