//! User settings: the snapshot the engine reads and the service that manages it
//!
//! Settings are persisted one key per field (see [`keys`]) so a missing key
//! always means "documented default". [`SettingsService`] turns a
//! [`SettingsStore`](crate::store::SettingsStore) into immutable [`Snapshot`]s
//! and applies management operations (default bang, toggles, custom bangs).

pub mod keys;
mod models;
mod service;

pub use models::{DuckAssistLevel, FALLBACK_TRIGGER, Settings, SettingsPatch};
pub use service::{RemovedBang, SettingsError, SettingsService, Snapshot};
