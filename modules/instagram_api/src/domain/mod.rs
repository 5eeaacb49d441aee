//! Domain layer - settings store logic

pub mod repository;
pub mod service;

pub use repository::SettingsRepository;
pub use service::Service;
