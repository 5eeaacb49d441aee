//! Contract models for settings storage
//!
//! These models are transport-agnostic and used by every settings backend.
//! NO serde derives - these are pure domain models.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

use super::error::SettingsError;

/// Format used for the `date` column when exposed as a string
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keys that callers may never write through [`SettingKey`] based setters.
///
/// `sets` used to address the whole settings map and `username` is owned by
/// the store itself.
pub const RESERVED_KEYS: [&str; 2] = ["sets", "username"];

/// One settings row per Instagram account
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRecord {
    /// Database-assigned row id (None until the first save)
    pub id: Option<i64>,
    /// Instagram username the row belongs to
    pub username: String,
    /// Numeric Instagram user id
    pub username_id: Option<i64>,
    /// Device fingerprint string used for the User-Agent
    pub devicestring: Option<String>,
    /// Android device id
    pub device_id: Option<String>,
    /// Phone id
    pub phone_id: Option<String>,
    /// Client uuid
    pub uuid: Option<String>,
    /// Auth token
    pub token: Option<String>,
    /// Serialized cookie jar
    pub cookies: Option<String>,
    /// Row creation timestamp
    pub date: Option<NaiveDateTime>,
    /// Unix timestamp of the last login
    pub last_login: Option<i64>,
    /// Settings without a dedicated column
    pub extra: BTreeMap<String, String>,
}

/// Address of a single value inside a [`SettingsRecord`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingKey {
    Id,
    Username,
    UsernameId,
    DeviceString,
    DeviceId,
    PhoneId,
    Uuid,
    Token,
    Cookies,
    Date,
    LastLogin,
    /// Any key without a dedicated column
    Extra(String),
}

impl SettingKey {
    /// Every key that maps onto a column of the settings table
    pub const COLUMNS: [SettingKey; 11] = [
        SettingKey::Id,
        SettingKey::Username,
        SettingKey::UsernameId,
        SettingKey::DeviceString,
        SettingKey::DeviceId,
        SettingKey::PhoneId,
        SettingKey::Uuid,
        SettingKey::Token,
        SettingKey::Cookies,
        SettingKey::Date,
        SettingKey::LastLogin,
    ];

    /// Resolve a key from its column name. Unknown names become [`SettingKey::Extra`].
    pub fn parse(name: &str) -> Self {
        match name {
            "id" => Self::Id,
            "username" => Self::Username,
            "username_id" => Self::UsernameId,
            "devicestring" => Self::DeviceString,
            "device_id" => Self::DeviceId,
            "phone_id" => Self::PhoneId,
            "uuid" => Self::Uuid,
            "token" => Self::Token,
            "cookies" => Self::Cookies,
            "date" => Self::Date,
            "last_login" => Self::LastLogin,
            other => Self::Extra(other.to_string()),
        }
    }

    /// Column (or extra) name of this key
    pub fn as_str(&self) -> &str {
        match self {
            Self::Id => "id",
            Self::Username => "username",
            Self::UsernameId => "username_id",
            Self::DeviceString => "devicestring",
            Self::DeviceId => "device_id",
            Self::PhoneId => "phone_id",
            Self::Uuid => "uuid",
            Self::Token => "token",
            Self::Cookies => "cookies",
            Self::Date => "date",
            Self::LastLogin => "last_login",
            Self::Extra(name) => name,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SettingsRecord {
    /// Create an empty record for a username that has no row yet
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Read a value as its string representation
    pub fn get(&self, key: &SettingKey) -> Option<String> {
        match key {
            SettingKey::Id => self.id.map(|v| v.to_string()),
            SettingKey::Username => {
                (!self.username.is_empty()).then(|| self.username.clone())
            }
            SettingKey::UsernameId => self.username_id.map(|v| v.to_string()),
            SettingKey::DeviceString => self.devicestring.clone(),
            SettingKey::DeviceId => self.device_id.clone(),
            SettingKey::PhoneId => self.phone_id.clone(),
            SettingKey::Uuid => self.uuid.clone(),
            SettingKey::Token => self.token.clone(),
            SettingKey::Cookies => self.cookies.clone(),
            SettingKey::Date => self.date.map(|d| d.format(DATE_FORMAT).to_string()),
            SettingKey::LastLogin => self.last_login.map(|v| v.to_string()),
            SettingKey::Extra(name) => self.extra.get(name).cloned(),
        }
    }

    /// Write a value, converting it into the column type.
    ///
    /// Nothing is modified when the conversion fails.
    pub fn apply(&mut self, key: &SettingKey, value: String) -> Result<(), SettingsError> {
        match key {
            SettingKey::Id => self.id = Some(parse_integer(key, &value)?),
            SettingKey::Username => self.username = value,
            SettingKey::UsernameId => self.username_id = Some(parse_integer(key, &value)?),
            SettingKey::DeviceString => self.devicestring = Some(value),
            SettingKey::DeviceId => self.device_id = Some(value),
            SettingKey::PhoneId => self.phone_id = Some(value),
            SettingKey::Uuid => self.uuid = Some(value),
            SettingKey::Token => self.token = Some(value),
            SettingKey::Cookies => self.cookies = Some(value),
            SettingKey::Date => {
                let date = NaiveDateTime::parse_from_str(&value, DATE_FORMAT).map_err(|e| {
                    SettingsError::Validation {
                        key: key.to_string(),
                        message: e.to_string(),
                    }
                })?;
                self.date = Some(date);
            }
            SettingKey::LastLogin => self.last_login = Some(parse_integer(key, &value)?),
            SettingKey::Extra(name) => {
                self.extra.insert(name.clone(), value);
            }
        }
        Ok(())
    }

    /// Every present value keyed by its column or extra name
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map: BTreeMap<String, String> = SettingKey::COLUMNS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect();
        map.extend(self.extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        map
    }

    /// Best-effort guess whether the stored session is logged in.
    ///
    /// The token may be expired; nothing is verified remotely.
    pub fn maybe_logged_in(&self) -> bool {
        // id 0 is a valid row id, so only presence matters here
        self.id.is_some()
            && self.username_id.is_some_and(|id| id != 0)
            && self.token.as_deref().is_some_and(|t| !t.is_empty() && t != "0")
    }
}

fn parse_integer(key: &SettingKey, value: &str) -> Result<i64, SettingsError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| SettingsError::Validation {
            key: key.to_string(),
            message: format!("expected an integer, got '{}': {}", value, e),
        })
}
