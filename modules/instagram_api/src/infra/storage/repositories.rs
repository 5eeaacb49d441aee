//! SeaORM repository implementation

use crate::contract::SettingsRecord;
use crate::domain::repository::SettingsRepository;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::entity::{extra_table_name, SettingsExtra, UserSettings};
use super::{mapper, migrations};

/// Settings repository backed by a SeaORM connection
pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
    table: String,
    extra_table: String,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>, table: impl Into<String>) -> Self {
        let table = table.into();
        Self {
            db,
            extra_table: extra_table_name(&table),
            table,
        }
    }

    /// Name of the settings table
    pub fn table(&self) -> &str {
        &self.table
    }

    async fn load_extra(&self, settings_id: i64) -> Result<BTreeMap<String, String>> {
        let backend = self.db.get_database_backend();
        let stmt = Query::select()
            .columns([SettingsExtra::Name, SettingsExtra::Value])
            .from(Alias::new(&self.extra_table))
            .and_where(Expr::col(SettingsExtra::SettingsId).eq(settings_id))
            .to_owned();

        let mut extra = BTreeMap::new();
        for row in self.db.query_all(backend.build(&stmt)).await? {
            let name: String = row.try_get("", "name")?;
            let value: Option<String> = row.try_get("", "value")?;
            extra.insert(name, value.unwrap_or_default());
        }

        Ok(extra)
    }

    /// Replace the extra rows of a settings row inside `conn`
    async fn replace_extra<C: ConnectionTrait>(
        &self,
        conn: &C,
        settings_id: i64,
        extra: &BTreeMap<String, String>,
    ) -> Result<()> {
        let backend = conn.get_database_backend();

        let delete = Query::delete()
            .from_table(Alias::new(&self.extra_table))
            .and_where(Expr::col(SettingsExtra::SettingsId).eq(settings_id))
            .to_owned();
        conn.execute(backend.build(&delete)).await?;

        if extra.is_empty() {
            return Ok(());
        }

        let mut insert = Query::insert();
        insert.into_table(Alias::new(&self.extra_table)).columns([
            SettingsExtra::SettingsId,
            SettingsExtra::Name,
            SettingsExtra::Value,
        ]);
        for (name, value) in extra {
            insert.values([
                Expr::value(settings_id),
                Expr::value(name.clone()),
                Expr::value(value.clone()),
            ])?;
        }
        conn.execute(backend.build(&insert)).await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn provision(&self) -> Result<bool> {
        Ok(migrations::auto_install(&self.db, &self.table).await?)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<SettingsRecord>> {
        let backend = self.db.get_database_backend();
        let stmt = Query::select()
            .columns(UserSettings::ALL)
            .from(Alias::new(&self.table))
            .and_where(Expr::col(UserSettings::Username).eq(username))
            .to_owned();

        let Some(row) = self.db.query_one(backend.build(&stmt)).await? else {
            return Ok(None);
        };

        let mut record = mapper::record_from_row(&row)?;
        if let Some(id) = record.id {
            record.extra = self.load_extra(id).await?;
        }

        Ok(Some(record))
    }

    async fn insert(&self, record: &SettingsRecord) -> Result<i64> {
        let backend = self.db.get_database_backend();
        let (columns, values) = mapper::insert_values(record);

        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(&self.table))
            .columns(columns)
            .values(values)?;

        let txn = self.db.begin().await?;
        let result = txn.execute(backend.build(&stmt)).await?;
        let id = i64::try_from(result.last_insert_id())?;
        self.replace_extra(&txn, id, &record.extra).await?;
        txn.commit().await?;

        Ok(id)
    }

    async fn update(&self, record: &SettingsRecord) -> Result<()> {
        let id = record
            .id
            .ok_or_else(|| anyhow!("cannot update settings of '{}' without a row id", record.username))?;
        let backend = self.db.get_database_backend();

        let stmt = Query::update()
            .table(Alias::new(&self.table))
            .values(mapper::column_values(record))
            .and_where(Expr::col(UserSettings::Id).eq(id))
            .to_owned();

        let txn = self.db.begin().await?;
        txn.execute(backend.build(&stmt)).await?;
        self.replace_extra(&txn, id, &record.extra).await?;
        txn.commit().await?;

        Ok(())
    }
}
