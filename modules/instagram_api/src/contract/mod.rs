//! Contract layer - public API for settings storage
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::{SettingKey, SettingsRecord, DATE_FORMAT, RESERVED_KEYS};
