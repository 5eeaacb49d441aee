//! Common test utilities: in-memory repository and database helpers
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use instagram_api::contract::SettingsRecord;
use instagram_api::domain::repository::SettingsRepository;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Route `tracing` output to the test writer
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("instagram_api=debug")
        .with_test_writer()
        .try_init();
}

/// Single-connection in-memory SQLite database
pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);
    Database::connect(options)
        .await
        .expect("Failed to open in-memory database")
}

/// Repository keeping rows in memory and counting writes
#[derive(Clone, Default)]
pub struct MockSettingsRepo {
    rows: Arc<RwLock<HashMap<String, SettingsRecord>>>,
    next_id: Arc<AtomicUsize>,
    provisioned: Arc<RwLock<bool>>,
    pub inserts: Arc<AtomicUsize>,
    pub updates: Arc<AtomicUsize>,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self {
            next_id: Arc::new(AtomicUsize::new(1)),
            ..Self::default()
        }
    }

    pub fn with_row(self, record: SettingsRecord) -> Self {
        self.rows.write().insert(record.username.clone(), record);
        self
    }

    pub fn row(&self, username: &str) -> Option<SettingsRecord> {
        self.rows.read().get(username).cloned()
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Print verbose information about repository state
    pub fn print_state(&self, context: &str) {
        let rows = self.rows.read();
        println!("\n========== SettingsRepository State: {} ==========", context);
        println!("Total rows: {}", rows.len());
        for (username, record) in rows.iter() {
            println!("  {} -> id={:?} {:?}", username, record.id, record.to_map());
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn provision(&self) -> Result<bool> {
        let mut provisioned = self.provisioned.write();
        let created = !*provisioned;
        *provisioned = true;
        Ok(created)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<SettingsRecord>> {
        Ok(self.row(username))
    }

    async fn insert(&self, record: &SettingsRecord) -> Result<i64> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let id = i64::try_from(self.next_id.fetch_add(1, Ordering::SeqCst))?;

        let mut stored = record.clone();
        stored.id = Some(id);
        self.rows.write().insert(stored.username.clone(), stored);
        Ok(id)
    }

    async fn update(&self, record: &SettingsRecord) -> Result<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if record.id.is_none() {
            return Err(anyhow!("update without id"));
        }
        self.rows
            .write()
            .insert(record.username.clone(), record.clone());
        Ok(())
    }
}

/// Repository whose every query fails
pub struct FailingRepo;

#[async_trait]
impl SettingsRepository for FailingRepo {
    async fn provision(&self) -> Result<bool> {
        Ok(false)
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<SettingsRecord>> {
        Ok(None)
    }

    async fn insert(&self, _record: &SettingsRecord) -> Result<i64> {
        Err(anyhow!("table is read-only"))
    }

    async fn update(&self, _record: &SettingsRecord) -> Result<()> {
        Err(anyhow!("table is read-only"))
    }
}
