use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::bangs::{BangDefinition, BangError, BangRegistry, CustomBang, clean_trigger};
use crate::store::{SettingsStore, StoreError};

use super::keys;
use super::models::{FALLBACK_TRIGGER, Settings, SettingsPatch};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Bang(#[from] BangError),

    #[error("Settings store failed: {0}")]
    Store(#[from] StoreError),
}

/// Immutable (registry, settings) pair handed to the resolution engine
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub registry: BangRegistry,
    pub settings: Settings,
}

/// Outcome of removing a custom bang
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedBang {
    pub bang: BangDefinition,
    /// The removed bang was the default, which now points back at the fallback
    pub default_reset: bool,
}

/// Reads snapshots from and applies management operations to a settings store
#[derive(Clone)]
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn settings(&self) -> Result<Settings, SettingsError> {
        Ok(keys::read_settings(self.store())?)
    }

    pub fn custom_bangs(&self) -> Result<Vec<BangDefinition>, SettingsError> {
        Ok(keys::read_custom_bangs(self.store())?)
    }

    pub fn registry(&self) -> Result<BangRegistry, SettingsError> {
        Ok(BangRegistry::with_custom(self.custom_bangs()?))
    }

    /// Fresh snapshot of everything a resolution call needs
    pub fn snapshot(&self) -> Result<Snapshot, SettingsError> {
        Ok(Snapshot {
            registry: self.registry()?,
            settings: self.settings()?,
        })
    }

    /// Apply a partial update; a new default bang must exist in the registry
    pub fn update(&self, patch: SettingsPatch) -> Result<Settings, SettingsError> {
        let store = self.store();

        if let Some(ref raw) = patch.default_trigger {
            let trigger = clean_trigger(raw);
            if !self.registry()?.contains(&trigger) {
                return Err(BangError::Unknown(trigger).into());
            }
            store.set(keys::DEFAULT_BANG, &trigger)?;
            info!(trigger = %trigger, "Default bang updated");
        }

        let toggles = [
            (keys::MULTI_BANG_ENABLED, patch.multi_bang_enabled),
            (keys::REDDIT_SITE_SEARCH, patch.reddit_site_search),
            (keys::DISABLE_DDG_ADS, patch.disable_ddg_ads),
            (keys::DISABLE_DDG_PROMOS, patch.disable_ddg_promos),
            (keys::DISABLE_GOOGLE_AI, patch.disable_google_ai),
        ];
        for (key, value) in toggles {
            if let Some(value) = value {
                keys::write_bool(store, key, value)?;
                info!(key, value, "Setting updated");
            }
        }

        if let Some(level) = patch.duck_assist_level {
            store.set(keys::DUCK_ASSIST, level.as_str())?;
            info!(level = level.label(), "DuckAssist level updated");
        }

        self.settings()
    }

    /// Validate and append a user-added bang
    pub fn add_custom_bang(
        &self,
        trigger: &str,
        url_template: &str,
    ) -> Result<BangDefinition, SettingsError> {
        let registry = self.registry()?;
        let bang = CustomBang::parse(trigger, url_template, &registry)?.into_definition();

        let mut custom = registry.custom().to_vec();
        custom.push(bang.clone());
        keys::write_custom_bangs(self.store(), &custom)?;

        info!(trigger = %bang.trigger, domain = %bang.domain, "Custom bang added");
        Ok(bang)
    }

    /// Remove a user-added bang by trigger.
    ///
    /// Removing the current default resets the default to the fallback trigger.
    pub fn remove_custom_bang(&self, trigger: &str) -> Result<RemovedBang, SettingsError> {
        let trigger = clean_trigger(trigger);
        let mut custom = self.custom_bangs()?;

        let position = custom
            .iter()
            .position(|bang| bang.trigger == trigger)
            .ok_or_else(|| BangError::Unknown(trigger.clone()))?;
        let bang = custom.remove(position);
        keys::write_custom_bangs(self.store(), &custom)?;

        let default_reset = self.settings()?.default_trigger == bang.trigger;
        if default_reset {
            self.store().set(keys::DEFAULT_BANG, FALLBACK_TRIGGER)?;
            info!(
                trigger = %bang.trigger,
                "Custom bang removed, default bang reset to !{}",
                FALLBACK_TRIGGER
            );
        } else {
            info!(trigger = %bang.trigger, "Custom bang removed");
        }

        Ok(RemovedBang {
            bang,
            default_reset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DuckAssistLevel;
    use crate::store::MemorySettingsStore;

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(MemorySettingsStore::new()))
    }

    #[test]
    fn test_snapshot_defaults() {
        let snapshot = service().snapshot().unwrap();

        assert_eq!(snapshot.settings, Settings::default());
        assert!(snapshot.registry.custom().is_empty());
        assert!(snapshot.registry.contains("ddg"));
    }

    #[test]
    fn test_update_cleans_and_validates_default() {
        let service = service();

        let settings = service
            .update(SettingsPatch {
                default_trigger: Some("  !G ".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(settings.default_trigger, "g");

        let err = service
            .update(SettingsPatch {
                default_trigger: Some("!nope".to_string()),
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, SettingsError::Bang(BangError::Unknown(ref t)) if t == "nope"));
        assert_eq!(service.settings().unwrap().default_trigger, "g");
    }

    #[test]
    fn test_update_toggles() {
        let service = service();

        let settings = service
            .update(SettingsPatch {
                multi_bang_enabled: Some(false),
                disable_google_ai: Some(true),
                duck_assist_level: Some(DuckAssistLevel::Often),
                ..Default::default()
            })
            .unwrap();

        assert!(!settings.multi_bang_enabled);
        assert!(settings.disable_google_ai);
        assert_eq!(settings.duck_assist_level, DuckAssistLevel::Often);
        assert!(settings.reddit_site_search);
        assert_eq!(
            service.store().get(keys::DUCK_ASSIST).unwrap(),
            Some("3".to_string())
        );
    }

    #[test]
    fn test_add_custom_bang_extends_registry() {
        let service = service();

        let bang = service
            .add_custom_bang("!Gpt", "chatgpt.com/?q=%s")
            .unwrap();
        assert_eq!(bang.trigger, "gpt");
        assert_eq!(bang.url_template, "https://chatgpt.com/?q=%s");

        let registry = service.registry().unwrap();
        assert_eq!(registry.custom(), &[bang]);

        let err = service.add_custom_bang("gpt", "https://x.com/?q=%s").unwrap_err();
        assert!(matches!(err, SettingsError::Bang(BangError::Duplicate(_))));
    }

    #[test]
    fn test_remove_custom_bang_resets_default() {
        let service = service();
        service.add_custom_bang("mine", "https://mine.dev/?q=%s").unwrap();
        service
            .update(SettingsPatch {
                default_trigger: Some("mine".to_string()),
                ..Default::default()
            })
            .unwrap();

        let removed = service.remove_custom_bang("!mine").unwrap();
        assert_eq!(removed.bang.trigger, "mine");
        assert!(removed.default_reset);
        assert_eq!(service.settings().unwrap().default_trigger, FALLBACK_TRIGGER);
        assert!(service.custom_bangs().unwrap().is_empty());
    }

    #[test]
    fn test_remove_custom_bang_keeps_unrelated_default() {
        let service = service();
        service.add_custom_bang("mine", "https://mine.dev/?q=%s").unwrap();

        let removed = service.remove_custom_bang("mine").unwrap();
        assert!(!removed.default_reset);
        assert_eq!(service.settings().unwrap().default_trigger, "ddg");
    }

    #[test]
    fn test_remove_unknown_custom_bang() {
        let err = service().remove_custom_bang("g").unwrap_err();
        assert!(matches!(err, SettingsError::Bang(BangError::Unknown(_))));
    }
}
