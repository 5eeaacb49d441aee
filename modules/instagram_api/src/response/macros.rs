//! Declaration macro for mapped entities

/// Declare a mapped entity from its property map.
///
/// ```ignore
/// mapped_entity! {
///     pub struct Tag {
///         NAME: String = "name",
///         MEDIA_COUNT: i64 = "media_count",
///     }
/// }
/// ```
///
/// Generates a newtype over [`PropertyMap`](crate::response::PropertyMap),
/// one typed [`Property`](crate::response::Property) constant per entry, and
/// the `MappedEntity`, `PropertyValue` and serde impls. The `response` form
/// also declares the `status`, `message` and `_messages` envelope fields and
/// implements `ApiResponse`.
macro_rules! mapped_entity {
    (
        $(#[$meta:meta])*
        $vis:vis response $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::response::macros::mapped_entity! {
            $(#[$meta])*
            $vis struct $name {
                /// `ok` or `fail`
                STATUS: String = "status",
                MESSAGE: serde_json::Value = "message",
                MESSAGES: Vec<$crate::response::model::Message> = "_messages",
                $($body)*
            }
        }

        impl $crate::response::ApiResponse for $name {}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$pmeta:meta])*
                $konst:ident : $ty:ty = $json:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name($crate::response::PropertyMap);

        impl $name {
            $(
                $(#[$pmeta])*
                pub const $konst: $crate::response::Property<$ty> =
                    $crate::response::Property::new($json);
            )*
        }

        impl $crate::response::MappedEntity for $name {
            const PROPERTY_MAP: &'static [$crate::response::PropertyDef] = &[
                $(
                    $crate::response::PropertyDef {
                        name: $json,
                        ty: <$ty as $crate::response::PropertyValue>::TYPE,
                        normalize: <$ty as $crate::response::PropertyValue>::normalize,
                    },
                )*
            ];

            fn from_map(map: $crate::response::PropertyMap) -> Self {
                Self(map)
            }

            fn as_map(&self) -> &$crate::response::PropertyMap {
                &self.0
            }

            fn as_map_mut(&mut self) -> &mut $crate::response::PropertyMap {
                &mut self.0
            }

            fn into_map(self) -> $crate::response::PropertyMap {
                self.0
            }
        }

        impl $crate::response::PropertyValue for $name {
            const TYPE: $crate::response::PropertyType =
                $crate::response::PropertyType::named(stringify!($name));

            fn from_json(value: &serde_json::Value) -> Option<Self> {
                value
                    .is_object()
                    .then(|| <Self as $crate::response::MappedEntity>::from_value(value.clone()))
            }

            fn into_json(self) -> serde_json::Value {
                serde_json::Value::Object(self.0.into_object())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                Ok(<Self as $crate::response::MappedEntity>::from_value(value))
            }
        }
    };
}

pub(crate) use mapped_entity;
