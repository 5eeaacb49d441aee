//! Configuration for the settings store

use crate::contract::SettingsError;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for settings store configuration
pub const ENV_PREFIX: &str = "INSTAGRAM_SETTINGS_";

/// Settings store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the settings table
    #[serde(default = "default_table_name")]
    pub db_tablename: String,

    /// MySQL host
    #[serde(default = "default_host")]
    pub db_host: String,

    /// MySQL user
    #[serde(default = "default_username")]
    pub db_username: String,

    /// MySQL password
    #[serde(default)]
    pub db_password: String,

    /// MySQL database name
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Full connection URL, overrides the individual connection fields
    #[serde(default)]
    pub db_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_tablename: default_table_name(),
            db_host: default_host(),
            db_username: default_username(),
            db_password: String::new(),
            db_name: default_db_name(),
            db_url: None,
        }
    }
}

impl Config {
    /// Load configuration from defaults, an optional YAML file and the
    /// `INSTAGRAM_SETTINGS_*` environment variables, in that order.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).lowercase(true))
            .extract()
            .map_err(|e| SettingsError::Config {
                message: e.to_string(),
            })
    }

    /// Connection URL for the configured database
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.db_url {
            return url.clone();
        }

        let credentials = if self.db_password.is_empty() {
            urlencoding::encode(&self.db_username).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&self.db_username),
                urlencoding::encode(&self.db_password)
            )
        };

        format!("mysql://{}@{}/{}", credentials, self.db_host, self.db_name)
    }
}

fn default_table_name() -> String {
    "user_settings".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_username() -> String {
    "root".to_string()
}

fn default_db_name() -> String {
    "instagram".to_string()
}
