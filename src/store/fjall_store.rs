use std::path::Path;

use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use tracing::{debug, info};

use super::SettingsStore;
use super::error::Result;

const SETTINGS_PARTITION: &str = "settings";

/// Encode a settings key: setting:{key}
fn encode_setting_key(key: &str) -> Vec<u8> {
    format!("setting:{}", key).into_bytes()
}

/// Fjall-backed settings storage
#[derive(Clone)]
pub struct FjallSettingsStore {
    keyspace: Keyspace,
    settings: PartitionHandle,
}

impl FjallSettingsStore {
    /// Open or create a store at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening settings store at: {}", path.display());

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let keyspace = Config::new(path).open()?;
        let settings =
            keyspace.open_partition(SETTINGS_PARTITION, PartitionCreateOptions::default())?;

        Ok(Self { keyspace, settings })
    }

    /// Flush pending writes to disk
    pub fn persist(&self) -> Result<()> {
        self.keyspace.persist(PersistMode::SyncAll)?;
        Ok(())
    }
}

impl SettingsStore for FjallSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.settings.get(encode_setting_key(key))? {
            Some(value) => Ok(Some(String::from_utf8_lossy(&value).to_string())),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.settings.insert(encode_setting_key(key), value.as_bytes())?;
        debug!(key, value, "Setting stored");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.settings.remove(encode_setting_key(key))?;
        debug!(key, "Setting removed");
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.persist()
    }
}
