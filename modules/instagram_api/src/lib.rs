//! Instagram private API building blocks
//!
//! Device identities the official Android app would present, tolerant-reader
//! response entities, and a relational per-account settings store.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, SettingKey, SettingsRecord, DATE_FORMAT,
    RESERVED_KEYS,
};

pub mod module;
pub use module::SettingsStoreModule;

pub mod config;
pub use config::Config;

pub mod devices;
pub use devices::{Device, DeviceError};

pub mod response;
pub use response::{ApiResponse, MappedEntity};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
