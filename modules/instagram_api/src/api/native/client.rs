//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{SettingsApi, SettingsError, SettingsRecord};
use crate::domain::Service;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This is the handle the rest of the client library holds on to.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    fn username(&self) -> &str {
        self.service.username()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.service.get(key)
    }

    fn get_or(&self, key: &str, default: &str) -> String {
        self.service.get_or(key, default)
    }

    fn all(&self) -> BTreeMap<String, String> {
        self.service.all()
    }

    fn record(&self) -> SettingsRecord {
        self.service.record()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.service.set(key, value).await
    }

    async fn save(&self) -> Result<(), SettingsError> {
        self.service.save().await
    }

    fn maybe_logged_in(&self) -> bool {
        self.service.maybe_logged_in()
    }
}
