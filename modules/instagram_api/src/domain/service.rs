//! Domain service - settings store orchestration

use crate::contract::{SettingKey, SettingsError, SettingsRecord, RESERVED_KEYS};
use super::repository::SettingsRepository;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Settings store for a single Instagram account.
///
/// Construction provisions the tables and loads the account row. Every
/// successful `set` persists the full row immediately. Writes are applied
/// one at a time; the in-memory row only changes once the database accepted
/// it.
pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    username: String,
    /// In-memory copy of the account row
    record: RwLock<SettingsRecord>,
    /// Held from snapshot to id capture of every write
    write_lock: Mutex<()>,
}

impl Service {
    /// Provision storage and load the row of `username`
    pub async fn open(
        repo: Arc<dyn SettingsRepository>,
        username: impl Into<String>,
    ) -> Result<Self, SettingsError> {
        let username = username.into();

        if repo.provision().await.map_err(SettingsError::query)? {
            tracing::info!("Settings tables created");
        }

        let record = match repo
            .find_by_username(&username)
            .await
            .map_err(SettingsError::query)?
        {
            Some(record) => {
                tracing::debug!(username = %username, id = ?record.id, "Loaded settings row");
                record
            }
            None => {
                tracing::debug!(username = %username, "No settings row yet, starting empty");
                SettingsRecord::new(username.clone())
            }
        };

        Ok(Self {
            repo,
            username,
            record: RwLock::new(record),
            write_lock: Mutex::new(()),
        })
    }

    /// Username the settings belong to
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get a stored value
    pub fn get(&self, key: &str) -> Option<String> {
        self.record.read().get(&SettingKey::parse(key))
    }

    /// Get a stored value or the supplied default
    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Every stored value keyed by column or extra name
    pub fn all(&self) -> BTreeMap<String, String> {
        self.record.read().to_map()
    }

    /// Snapshot of the structured record
    pub fn record(&self) -> SettingsRecord {
        self.record.read().clone()
    }

    /// Store a value and persist the whole row.
    ///
    /// Writes to reserved keys are ignored. A value that does not fit its
    /// column is rejected before anything is written. On failure the stored
    /// values are left unchanged.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        if RESERVED_KEYS.contains(&key) {
            tracing::warn!(key, "Ignoring write to reserved settings key");
            return Ok(());
        }

        let _guard = self.write_lock.lock().await;
        let mut next = self.record.read().clone();
        next.apply(&SettingKey::parse(key), value.to_string())?;

        let saved = self.persist(next).await?;
        *self.record.write() = saved;
        Ok(())
    }

    /// Persist the whole row
    pub async fn save(&self) -> Result<(), SettingsError> {
        let _guard = self.write_lock.lock().await;
        let snapshot = self.record.read().clone();

        let saved = self.persist(snapshot).await?;
        *self.record.write() = saved;
        Ok(())
    }

    /// Write `record` and return it as stored.
    ///
    /// Inserts when the row has no id yet and records the assigned id,
    /// otherwise updates the existing row. Callers hold `write_lock`.
    async fn persist(&self, mut record: SettingsRecord) -> Result<SettingsRecord, SettingsError> {
        record.username = self.username.clone();

        match record.id {
            Some(id) => {
                self.repo
                    .update(&record)
                    .await
                    .map_err(SettingsError::query)?;
                tracing::debug!(username = %self.username, id, "Updated settings row");
            }
            None => {
                let id = self
                    .repo
                    .insert(&record)
                    .await
                    .map_err(SettingsError::query)?;
                record.id = Some(id);
                tracing::debug!(username = %self.username, id, "Inserted settings row");
            }
        }

        Ok(record)
    }

    /// Best-effort guess whether a session is stored
    pub fn maybe_logged_in(&self) -> bool {
        self.record.read().maybe_logged_in()
    }
}
