//! Native client trait for settings storage
//!
//! This trait defines the API the rest of the client library uses to read and
//! persist per-account settings. One instance owns one username.

use super::{error::SettingsError, model::SettingsRecord};
use async_trait::async_trait;
use std::collections::BTreeMap;

/// Settings storage API for a single Instagram account
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Username the settings belong to
    fn username(&self) -> &str;

    /// Get a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Get a stored value or the supplied default
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Every stored value keyed by column or extra name
    fn all(&self) -> BTreeMap<String, String>;

    /// Snapshot of the structured record
    fn record(&self) -> SettingsRecord;

    /// Store a value and persist the whole row.
    ///
    /// Writes to the reserved keys `sets` and `username` are ignored.
    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Persist the whole row
    async fn save(&self) -> Result<(), SettingsError>;

    /// Best-effort guess whether a session is stored
    fn maybe_logged_in(&self) -> bool;
}
