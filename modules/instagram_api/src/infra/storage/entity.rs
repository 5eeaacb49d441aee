//! Table and column identifiers
//!
//! The settings table name is configurable, so tables are addressed with an
//! `Alias` at runtime and only the columns are fixed.

use sea_orm::DeriveIden;

/// Columns of the settings table
#[derive(DeriveIden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserSettings {
    Id,
    Username,
    UsernameId,
    Devicestring,
    DeviceId,
    PhoneId,
    Uuid,
    Token,
    Cookies,
    Date,
    LastLogin,
}

impl UserSettings {
    /// Every column in table order
    pub const ALL: [UserSettings; 11] = [
        UserSettings::Id,
        UserSettings::Username,
        UserSettings::UsernameId,
        UserSettings::Devicestring,
        UserSettings::DeviceId,
        UserSettings::PhoneId,
        UserSettings::Uuid,
        UserSettings::Token,
        UserSettings::Cookies,
        UserSettings::Date,
        UserSettings::LastLogin,
    ];
}

/// Columns of the side table holding settings without a dedicated column
#[derive(DeriveIden, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsExtra {
    SettingsId,
    Name,
    Value,
}

/// Name of the side table belonging to a settings table
pub fn extra_table_name(table: &str) -> String {
    format!("{}_extra", table)
}
