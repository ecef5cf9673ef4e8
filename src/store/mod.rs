//! Key-value persistence for user settings and custom bangs
//!
//! Every setting is a single named string key (see `settings::keys`), the same
//! shape a browser's local storage gives a client-side app. Two backends:
//!
//! - [`FjallSettingsStore`] - embedded LSM store, one `settings` partition
//! - [`MemorySettingsStore`] - process-local map for tests and ephemeral runs
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quackly::store::{FjallSettingsStore, SettingsStore};
//!
//! let store = FjallSettingsStore::open("data/settings")?;
//! store.set("default-bang", "g")?;
//! assert_eq!(store.get("default-bang")?, Some("g".to_string()));
//! ```

pub mod error;
mod fjall_store;
mod memory;

use std::sync::Arc;

pub use error::{Result, StoreError};
pub use fjall_store::FjallSettingsStore;
pub use memory::MemorySettingsStore;

use crate::config::{StorageBackend, StorageConfig};

/// String-keyed settings storage shared across request handlers
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;

    /// Make pending writes durable; a no-op for volatile backends
    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

/// Open the backend selected by the storage configuration
pub fn open(config: &StorageConfig) -> Result<Arc<dyn SettingsStore>> {
    match config.backend {
        StorageBackend::Fjall => Ok(Arc::new(FjallSettingsStore::open(&config.path)?)),
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory settings store, changes are lost on restart");
            Ok(Arc::new(MemorySettingsStore::new()))
        }
    }
}
