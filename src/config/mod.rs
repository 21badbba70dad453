//! Configuration management
//!
//! Static settings schema, value validation, and a JSON value store with a
//! typed view for reminder logic.

pub mod hydrate_config;
pub mod schema;
pub mod store;
pub mod validation;

pub use hydrate_config::HydrateReminderConfig;
pub use schema::{Section, Setting, SettingKey, SettingKind, SettingValue, default_value};
pub use store::ConfigStore;
pub use validation::{ValidationError, validate, validate_value};
