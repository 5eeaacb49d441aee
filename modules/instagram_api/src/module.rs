//! Settings store bootstrap
//!
//! Wires configuration, connection, repository and domain service together:
//! connect, provision the tables, then load the account row.

use crate::api::native::NativeClient;
use crate::config::Config;
use crate::contract::{SettingsApi, SettingsError};
use crate::domain::Service;
use crate::infra::storage::SeaOrmSettingsRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// Entry point for opening per-account settings stores
#[derive(Debug, Clone, Default)]
pub struct SettingsStoreModule {
    config: Config,
}

impl SettingsStoreModule {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the module from defaults and `INSTAGRAM_SETTINGS_*` variables
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self::new(Config::load(None)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Open a dedicated single connection to the configured database
    pub async fn connect(&self) -> Result<DatabaseConnection, SettingsError> {
        let mut options = ConnectOptions::new(self.config.connection_url());
        options.max_connections(1).sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|e| SettingsError::Connection {
                message: e.to_string(),
            })?;

        tracing::info!(
            host = %self.config.db_host,
            database = %self.config.db_name,
            "Connected to settings database"
        );
        Ok(db)
    }

    /// Connect, provision and load the settings of `username`
    pub async fn open(&self, username: &str) -> Result<Arc<dyn SettingsApi>, SettingsError> {
        let db = self.connect().await?;
        self.open_with_connection(db, username).await
    }

    /// Provision and load the settings of `username` over an existing connection
    pub async fn open_with_connection(
        &self,
        db: DatabaseConnection,
        username: &str,
    ) -> Result<Arc<dyn SettingsApi>, SettingsError> {
        let repo = Arc::new(SeaOrmSettingsRepository::new(
            Arc::new(db),
            self.config.db_tablename.clone(),
        ));
        let service = Arc::new(Service::open(repo, username).await?);

        tracing::info!(
            username,
            table = %self.config.db_tablename,
            "Settings store ready"
        );
        Ok(Arc::new(NativeClient::new(service)))
    }
}
