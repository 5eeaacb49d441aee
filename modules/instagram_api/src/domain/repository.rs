//! Repository trait for settings data access
//!
//! Implementations are in infra/storage/repositories.rs

use crate::contract::SettingsRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Repository for per-account settings rows
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Create the settings tables when they are missing.
    ///
    /// Returns `true` when the tables had to be created.
    async fn provision(&self) -> Result<bool>;

    /// Find the row of a username. `None` means a new user.
    async fn find_by_username(&self, username: &str) -> Result<Option<SettingsRecord>>;

    /// Insert a new row and return the database-assigned id
    async fn insert(&self, record: &SettingsRecord) -> Result<i64>;

    /// Overwrite every column of the row identified by `record.id`
    async fn update(&self, record: &SettingsRecord) -> Result<()>;
}
