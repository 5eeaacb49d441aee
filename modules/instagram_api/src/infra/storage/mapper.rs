//! Row to record mappers
//!
//! Conversions between query rows / statement values and contract models

use crate::contract::{SettingKey, SettingsRecord};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{DbErr, QueryResult};
use std::collections::BTreeMap;

use super::entity::UserSettings;

/// Build a record from a settings row. Extras are loaded separately.
pub fn record_from_row(row: &QueryResult) -> Result<SettingsRecord, DbErr> {
    Ok(SettingsRecord {
        id: row.try_get("", SettingKey::Id.as_str())?,
        username: row
            .try_get::<Option<String>>("", SettingKey::Username.as_str())?
            .unwrap_or_default(),
        username_id: row.try_get("", SettingKey::UsernameId.as_str())?,
        devicestring: row.try_get("", SettingKey::DeviceString.as_str())?,
        device_id: row.try_get("", SettingKey::DeviceId.as_str())?,
        phone_id: row.try_get("", SettingKey::PhoneId.as_str())?,
        uuid: row.try_get("", SettingKey::Uuid.as_str())?,
        token: row.try_get("", SettingKey::Token.as_str())?,
        cookies: row.try_get("", SettingKey::Cookies.as_str())?,
        date: row.try_get("", SettingKey::Date.as_str())?,
        last_login: row.try_get("", SettingKey::LastLogin.as_str())?,
        extra: BTreeMap::new(),
    })
}

/// Column values written by INSERT and UPDATE.
///
/// Every column except `id` is written, NULL included. `date` and
/// `last_login` carry database defaults and are only written once the record
/// holds a value for them.
pub fn column_values(record: &SettingsRecord) -> Vec<(UserSettings, SimpleExpr)> {
    let mut values = vec![
        (UserSettings::Username, Expr::value(record.username.clone())),
        (UserSettings::UsernameId, Expr::value(record.username_id)),
        (UserSettings::Devicestring, Expr::value(record.devicestring.clone())),
        (UserSettings::DeviceId, Expr::value(record.device_id.clone())),
        (UserSettings::PhoneId, Expr::value(record.phone_id.clone())),
        (UserSettings::Uuid, Expr::value(record.uuid.clone())),
        (UserSettings::Token, Expr::value(record.token.clone())),
        (UserSettings::Cookies, Expr::value(record.cookies.clone())),
    ];
    if let Some(date) = record.date {
        values.push((UserSettings::Date, Expr::value(date)));
    }
    if let Some(last_login) = record.last_login {
        values.push((UserSettings::LastLogin, Expr::value(last_login)));
    }
    values
}

/// Columns and values for an INSERT
pub fn insert_values(record: &SettingsRecord) -> (Vec<UserSettings>, Vec<SimpleExpr>) {
    column_values(record).into_iter().unzip()
}
