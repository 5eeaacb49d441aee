//! Tolerant-reader entity trait shared by every model and response

use serde_json::Value;

use super::naming::accessor_name;
use super::property::{Property, PropertyDef, PropertyMap, PropertyValue};

/// An entity backed by a [`PropertyMap`] and described by a declarative
/// property map.
///
/// Construction never fails: undeclared fields are kept, declared fields are
/// coerced to their declared type when possible and kept verbatim otherwise.
/// Implemented through `mapped_entity!`.
pub trait MappedEntity: Sized {
    /// Declared properties, in declaration order
    const PROPERTY_MAP: &'static [PropertyDef];

    fn from_map(map: PropertyMap) -> Self;

    fn as_map(&self) -> &PropertyMap;

    fn as_map_mut(&mut self) -> &mut PropertyMap;

    fn into_map(self) -> PropertyMap;

    /// Declaration of the property stored under `name`
    fn property(name: &str) -> Option<&'static PropertyDef> {
        Self::PROPERTY_MAP.iter().find(|def| def.name == name)
    }

    /// Build from a decoded JSON value. Anything but an object yields an
    /// empty entity.
    fn from_value(value: Value) -> Self {
        let Value::Object(object) = value else {
            return Self::from_map(PropertyMap::new());
        };

        let mut map = PropertyMap::new();
        for (name, value) in object {
            let value = normalize_field::<Self>(&name, value);
            map.insert(name, value);
        }
        Self::from_map(map)
    }

    fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_value(serde_json::from_str(json)?))
    }

    /// JSON object holding every stored field
    fn to_value(&self) -> Value {
        Value::Object(self.as_map().clone().into_object())
    }

    /// Typed read. `None` when the field is absent, null or has a shape
    /// the declared type cannot represent.
    fn get<T: PropertyValue>(&self, property: Property<T>) -> Option<T> {
        self.as_map().get(property.name()).and_then(T::from_json)
    }

    /// Whether the field is present, including an explicit null
    fn has<T>(&self, property: Property<T>) -> bool {
        self.as_map().contains(property.name())
    }

    /// Loose truthiness of the field: absent, null, false, 0, "",
    /// "0", empty arrays and empty objects are false.
    fn is<T>(&self, property: Property<T>) -> bool {
        self.as_map().get(property.name()).is_some_and(is_truthy)
    }

    fn set<T: PropertyValue>(&mut self, property: Property<T>, value: T) -> &mut Self {
        self.as_map_mut().insert(property.name(), value.into_json());
        self
    }

    fn unset<T>(&mut self, property: Property<T>) -> &mut Self {
        self.as_map_mut().remove(property.name());
        self
    }

    /// Builder form of [`MappedEntity::set`]
    fn with<T: PropertyValue>(mut self, property: Property<T>, value: T) -> Self {
        self.set(property, value);
        self
    }

    fn raw(&self, name: &str) -> Option<&Value> {
        self.as_map().get(name)
    }

    fn has_raw(&self, name: &str) -> bool {
        self.as_map().contains(name)
    }

    /// Store a raw value, coercing it when `name` is declared
    fn set_raw(&mut self, name: &str, value: Value) -> &mut Self {
        let value = normalize_field::<Self>(name, value);
        self.as_map_mut().insert(name, value);
        self
    }

    fn unset_raw(&mut self, name: &str) -> &mut Self {
        self.as_map_mut().remove(name);
        self
    }

    /// Resolve an accessor name such as `UserId` to its JSON field.
    ///
    /// Declared properties are matched first, then undeclared fields present
    /// in this entity.
    fn field_for_accessor(&self, accessor: &str) -> Option<String> {
        if let Some(def) = Self::PROPERTY_MAP
            .iter()
            .find(|def| accessor_name(def.name) == accessor)
        {
            return Some(def.name.to_string());
        }

        self.as_map()
            .keys()
            .find(|name| accessor_name(name) == accessor)
            .map(str::to_string)
    }
}

fn normalize_field<E: MappedEntity>(name: &str, value: Value) -> Value {
    match E::property(name) {
        Some(def) if !value.is_null() => (def.normalize)(value),
        _ => value,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Common envelope of every API response.
///
/// Responses carry `status` (`ok` or `fail`), an optional `message` and
/// optional `_messages` notices next to their own fields.
pub trait ApiResponse: MappedEntity {
    fn status(&self) -> Option<String> {
        self.get(super::STATUS)
    }

    fn message(&self) -> Option<Value> {
        self.get(super::MESSAGE).filter(|m| !m.is_null())
    }

    fn messages(&self) -> Vec<super::model::Message> {
        self.get(super::MESSAGES).unwrap_or_default()
    }

    fn is_ok(&self) -> bool {
        self.status().as_deref() == Some("ok")
    }

    /// Human readable error text of a failed response
    fn error_message(&self) -> Option<String> {
        match self.message()? {
            Value::String(message) => Some(message),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::macros::mapped_entity;
    use crate::response::model::*;
    use crate::response::*;
    use serde_json::json;

    mapped_entity! {
        struct Nested {
            X: i64 = "x",
        }
    }

    mapped_entity! {
        struct Outer {
            A: Value = "a",
            B: Nested = "b",
        }
    }

    #[test]
    fn nested_entities_are_built_from_sub_objects() {
        let mut outer = Outer::from_value(json!({"a": 1, "b": {"x": 2}}));

        assert_eq!(outer.get(Outer::A), Some(json!(1)));
        let nested = outer.get(Outer::B).unwrap();
        assert_eq!(nested.get(Nested::X), Some(2));
        assert!(!outer.has_raw("c"));
        assert_eq!(outer.raw("c"), None);

        outer.unset(Outer::A);
        assert!(!outer.has(Outer::A));
        assert_eq!(outer.get(Outer::A), None);
    }

    #[test]
    fn explicit_null_is_present_but_empty() {
        let outer = Outer::from_value(json!({"a": null, "b": null}));
        assert!(outer.has(Outer::A));
        assert!(outer.has(Outer::B));
        assert_eq!(outer.get(Outer::B), None);
        assert_eq!(outer.get(Outer::A), Some(Value::Null));
    }

    #[test]
    fn raw_writes_are_coerced_when_declared() {
        let mut outer = Outer::default();
        outer
            .set_raw("b", json!({"x": "5"}))
            .set_raw("extra", json!({"x": "5"}));

        assert_eq!(outer.raw("b"), Some(&json!({"x": 5})));
        assert_eq!(outer.raw("extra"), Some(&json!({"x": "5"})));

        outer.unset_raw("extra");
        assert!(!outer.has_raw("extra"));
    }

    #[test]
    fn truthiness_treats_empty_values_as_false() {
        let outer = Outer::from_value(json!({"a": "0"}));
        assert!(!outer.is(Outer::A));
        assert!(!outer.is(Outer::B));
        assert!(Outer::from_value(json!({"a": "no"})).is(Outer::A));
    }

    #[test]
    fn accessors_resolve_to_declared_and_present_fields() {
        let outer = Outer::from_value(json!({"some_extra_field": 1}));
        assert_eq!(outer.field_for_accessor("B").as_deref(), Some("b"));
        assert_eq!(
            outer.field_for_accessor("SomeExtraField").as_deref(),
            Some("some_extra_field")
        );
        assert_eq!(outer.field_for_accessor("Missing"), None);

        let response = SearchTagResponse::default();
        assert_eq!(response.field_for_accessor("Messages").as_deref(), Some("_messages"));
    }

    fn assert_accessors_round_trip<E: MappedEntity + Default>(entity: &str) {
        let sample = E::default();
        for def in E::PROPERTY_MAP {
            let accessor = accessor_name(def.name);
            assert_eq!(
                sample.field_for_accessor(&accessor).as_deref(),
                Some(def.name),
                "{entity}.{} does not round-trip through {accessor}",
                def.name
            );
        }
    }

    #[test]
    fn every_declared_field_round_trips_through_its_accessor() {
        assert_accessors_round_trip::<ActionBadge>("ActionBadge");
        assert_accessors_round_trip::<AndroidLinks>("AndroidLinks");
        assert_accessors_round_trip::<Caption>("Caption");
        assert_accessors_round_trip::<DirectThread>("DirectThread");
        assert_accessors_round_trip::<DirectThreadItem>("DirectThreadItem");
        assert_accessors_round_trip::<DirectThreadLastSeenAt>("DirectThreadLastSeenAt");
        assert_accessors_round_trip::<ExploreItemInfo>("ExploreItemInfo");
        assert_accessors_round_trip::<FriendshipStatus>("FriendshipStatus");
        assert_accessors_round_trip::<Message>("Message");
        assert_accessors_round_trip::<PermanentItem>("PermanentItem");
        assert_accessors_round_trip::<Reel>("Reel");
        assert_accessors_round_trip::<Subscription>("Subscription");
        assert_accessors_round_trip::<SuggestedUsers>("SuggestedUsers");
        assert_accessors_round_trip::<Suggestion>("Suggestion");
        assert_accessors_round_trip::<Tag>("Tag");
        assert_accessors_round_trip::<TagLayoutContent>("TagLayoutContent");
        assert_accessors_round_trip::<TagMedia>("TagMedia");
        assert_accessors_round_trip::<User>("User");
        assert_accessors_round_trip::<ActiveReelAdsResponse>("ActiveReelAdsResponse");
        assert_accessors_round_trip::<FbSearchResponse>("FbSearchResponse");
        assert_accessors_round_trip::<FriendshipsShowManyResponse>("FriendshipsShowManyResponse");
        assert_accessors_round_trip::<SearchTagResponse>("SearchTagResponse");
    }

    #[test]
    fn declared_types_are_reported() {
        let users = DirectThread::property("users").unwrap();
        assert_eq!(users.ty.to_string(), "User[]");
        assert!(DirectThread::property("named").unwrap().ty.is_untyped());
        assert!(DirectThread::property("nope").is_none());
    }
}
