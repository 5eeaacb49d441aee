//! Schema provisioning for the settings tables
//!
//! The table name is chosen at runtime, so provisioning checks for the tables
//! by name and creates them in place instead of running a tracked migrator.

use sea_orm::{DatabaseConnection, DbBackend};
use sea_orm_migration::prelude::*;

use super::entity::{extra_table_name, SettingsExtra, UserSettings};

/// Create the settings table and its side table when missing.
///
/// Returns `true` when the settings table itself had to be created.
pub async fn auto_install(db: &DatabaseConnection, table: &str) -> Result<bool, DbErr> {
    let manager = SchemaManager::new(db);
    let backend = manager.get_database_backend();

    let created = if manager.has_table(table).await? {
        false
    } else {
        manager.create_table(settings_table(table, backend)).await?;
        true
    };

    let extra = extra_table_name(table);
    if !manager.has_table(&extra).await? {
        manager.create_table(extra_table(&extra, backend)).await?;
    }

    Ok(created)
}

fn settings_table(table: &str, backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Alias::new(table))
        .if_not_exists()
        .col(
            ColumnDef::new(UserSettings::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(UserSettings::Username)
                .string_len(50)
                .null()
                .unique_key(),
        )
        .col(ColumnDef::new(UserSettings::UsernameId).big_integer().null())
        .col(ColumnDef::new(UserSettings::Devicestring).string_len(255).null())
        .col(ColumnDef::new(UserSettings::DeviceId).string_len(255).null())
        .col(ColumnDef::new(UserSettings::PhoneId).string_len(255).null())
        .col(ColumnDef::new(UserSettings::Uuid).string_len(255).null())
        .col(ColumnDef::new(UserSettings::Token).string_len(255).null())
        .col(ColumnDef::new(UserSettings::Cookies).text().null())
        .col(
            ColumnDef::new(UserSettings::Date)
                .timestamp()
                .null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(UserSettings::LastLogin)
                .big_integer()
                .null()
                .default(0),
        );

    if backend == DbBackend::MySql {
        stmt.engine("InnoDB").collate("utf8_general_ci");
    }

    stmt
}

fn extra_table(table: &str, backend: DbBackend) -> TableCreateStatement {
    let mut stmt = Table::create();
    stmt.table(Alias::new(table))
        .if_not_exists()
        .col(ColumnDef::new(SettingsExtra::SettingsId).integer().not_null())
        .col(ColumnDef::new(SettingsExtra::Name).string_len(191).not_null())
        .col(ColumnDef::new(SettingsExtra::Value).text().null())
        .primary_key(
            Index::create()
                .col(SettingsExtra::SettingsId)
                .col(SettingsExtra::Name),
        );

    if backend == DbBackend::MySql {
        stmt.engine("InnoDB").collate("utf8_general_ci");
    }

    stmt
}
