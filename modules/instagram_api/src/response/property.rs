//! Typed property keys and the untyped store behind mapped entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Declared type of a property.
///
/// `name` is empty for untyped pass-through properties; `depth` counts the
/// list levels, so `User[]` is `{ name: "User", depth: 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyType {
    pub name: &'static str,
    pub depth: u8,
}

impl PropertyType {
    pub const fn named(name: &'static str) -> Self {
        Self { name, depth: 0 }
    }

    pub const fn is_untyped(&self) -> bool {
        self.name.is_empty()
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)?;
        for _ in 0..self.depth {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// Conversion between a Rust type and its JSON representation.
pub trait PropertyValue: Sized {
    /// Declared type name
    const TYPE: PropertyType;

    /// Convert a stored value. `None` when the value has another shape.
    fn from_json(value: &Value) -> Option<Self>;

    fn into_json(self) -> Value;

    /// Coerce a raw value into the declared type, keeping it verbatim when
    /// it cannot be coerced.
    fn normalize(value: Value) -> Value {
        match Self::from_json(&value) {
            Some(converted) => converted.into_json(),
            None => value,
        }
    }
}

impl PropertyValue for Value {
    const TYPE: PropertyType = PropertyType::named("");

    fn from_json(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn into_json(self) -> Value {
        self
    }

    fn normalize(value: Value) -> Value {
        value
    }
}

impl PropertyValue for String {
    const TYPE: PropertyType = PropertyType::named("string");

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(s.clone()),
            // numeric ids are exposed as strings
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        Value::String(self)
    }
}

impl PropertyValue for bool {
    const TYPE: PropertyType = PropertyType::named("bool");

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_f64().map(|n| n != 0.0),
            Value::String(s) => match s.as_str() {
                "1" | "true" => Some(true),
                "0" | "false" | "" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        Value::Bool(self)
    }
}

impl PropertyValue for i64 {
    const TYPE: PropertyType = PropertyType::named("int");

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        Value::Number(self.into())
    }
}

impl PropertyValue for f64 {
    const TYPE: PropertyType = PropertyType::named("float");

    fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    fn into_json(self) -> Value {
        Number::from_f64(self).map_or(Value::Null, Value::Number)
    }

    fn normalize(value: Value) -> Value {
        match Self::from_json(&value).and_then(Number::from_f64) {
            Some(n) => Value::Number(n),
            None => value,
        }
    }
}

impl<T: PropertyValue> PropertyValue for Vec<T> {
    const TYPE: PropertyType = PropertyType {
        name: T::TYPE.name,
        depth: T::TYPE.depth + 1,
    };

    /// Elements that cannot be converted are skipped
    fn from_json(value: &Value) -> Option<Self> {
        Some(value.as_array()?.iter().filter_map(T::from_json).collect())
    }

    fn into_json(self) -> Value {
        Value::Array(self.into_iter().map(T::into_json).collect())
    }

    fn normalize(value: Value) -> Value {
        match value {
            Value::Array(items) => Value::Array(items.into_iter().map(T::normalize).collect()),
            other => other,
        }
    }
}

/// Objects keyed by id, such as `friendship_statuses`
impl<T: PropertyValue> PropertyValue for BTreeMap<String, T> {
    const TYPE: PropertyType = PropertyType {
        name: T::TYPE.name,
        depth: T::TYPE.depth + 1,
    };

    /// Entries that cannot be converted are skipped
    fn from_json(value: &Value) -> Option<Self> {
        Some(
            value
                .as_object()?
                .iter()
                .filter_map(|(key, item)| Some((key.clone(), T::from_json(item)?)))
                .collect(),
        )
    }

    fn into_json(self) -> Value {
        Value::Object(
            self.into_iter()
                .map(|(key, item)| (key, item.into_json()))
                .collect(),
        )
    }

    fn normalize(value: Value) -> Value {
        match value {
            Value::Object(items) => Value::Object(
                items
                    .into_iter()
                    .map(|(key, item)| (key, T::normalize(item)))
                    .collect(),
            ),
            other => other,
        }
    }
}

/// Compile-time typed key of a mapped entity property.
///
/// Declared through `mapped_entity!`, e.g. `Caption::USER_ID` is a
/// `Property<String>` addressing the `user_id` field.
pub struct Property<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Property<T> {
    #[doc(hidden)]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// JSON field name
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.name).finish()
    }
}

/// One entry of an entity's declarative property map
#[derive(Clone, Copy)]
pub struct PropertyDef {
    /// JSON field name
    pub name: &'static str,
    /// Declared type
    pub ty: PropertyType,
    /// Coercion applied when raw values enter the store
    pub normalize: fn(Value) -> Value,
}

impl fmt::Debug for PropertyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDef")
            .field("name", &self.name)
            .field("ty", &self.ty.to_string())
            .finish()
    }
}

/// Ordered untyped store of an entity's fields.
///
/// Holds every field of the source object, declared or not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap(Map<String, Value>);

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.0.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.shift_remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_object(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for PropertyMap {
    fn from(object: Map<String, Value>) -> Self {
        Self(object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn type_names_follow_the_declaration_syntax() {
        assert_eq!(<Value as PropertyValue>::TYPE.to_string(), "");
        assert_eq!(<String as PropertyValue>::TYPE.to_string(), "string");
        assert_eq!(<Vec<Vec<i64>> as PropertyValue>::TYPE.to_string(), "int[][]");
    }

    #[test]
    fn strings_accept_numeric_ids() {
        assert_eq!(
            String::normalize(json!(17841400000000000_u64)),
            json!("17841400000000000")
        );
        assert_eq!(String::normalize(json!({"a": 1})), json!({"a": 1}));
    }

    #[test]
    fn bools_accept_numeric_and_string_flags() {
        assert_eq!(bool::from_json(&json!(1)), Some(true));
        assert_eq!(bool::from_json(&json!("0")), Some(false));
        assert_eq!(bool::from_json(&json!("maybe")), None);
    }

    #[test]
    fn lists_normalize_element_wise() {
        assert_eq!(
            Vec::<String>::normalize(json!([1, "two", null])),
            json!(["1", "two", null])
        );
        assert_eq!(Vec::<String>::from_json(&json!("a")), None);
    }

    #[test]
    fn unconvertible_elements_are_skipped() {
        assert_eq!(
            Vec::<String>::from_json(&json!([1, null, "two"])),
            Some(vec!["1".to_string(), "two".to_string()])
        );
        assert_eq!(Vec::<i64>::from_json(&json!([])), Some(vec![]));

        let map = BTreeMap::<String, i64>::from_json(&json!({"a": 1, "b": "x"})).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn removal_keeps_the_remaining_order() {
        let mut map = PropertyMap::new();
        map.insert("c", json!(1));
        map.insert("a", json!(2));
        map.insert("b", json!(3));
        map.remove("a");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["c", "b"]);
    }
}
