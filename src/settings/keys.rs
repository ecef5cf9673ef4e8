//! Persistent key layout
//!
//! Each settings field is backed by one string key. Booleans are stored as the
//! literal strings `"true"` / `"false"`; an absent key means "use the default".

use crate::bangs::BangDefinition;
use crate::store::{Result, SettingsStore};

use super::models::{DuckAssistLevel, FALLBACK_TRIGGER, Settings};

pub const DEFAULT_BANG: &str = "default-bang";
pub const MULTI_BANG_ENABLED: &str = "multi-bang-enabled";
pub const REDDIT_SITE_SEARCH: &str = "reddit-site-search-enabled";
pub const DISABLE_DDG_ADS: &str = "disable-ddg-ads";
pub const DISABLE_DDG_PROMOS: &str = "disable-ddg-promos";
pub const DUCK_ASSIST: &str = "duck-assist-setting";
pub const DISABLE_GOOGLE_AI: &str = "disable-google-ai-overview";
pub const CUSTOM_BANGS: &str = "custom-bangs";

/// Read a boolean key; anything other than `"true"` reads as false
fn read_bool(store: &dyn SettingsStore, key: &str, default: bool) -> Result<bool> {
    Ok(store
        .get(key)?
        .map(|value| value == "true")
        .unwrap_or(default))
}

pub fn write_bool(store: &dyn SettingsStore, key: &str, value: bool) -> Result<()> {
    store.set(key, if value { "true" } else { "false" })
}

/// Build a settings snapshot from the persisted keys
pub fn read_settings(store: &dyn SettingsStore) -> Result<Settings> {
    let default_trigger = store
        .get(DEFAULT_BANG)?
        .unwrap_or_else(|| FALLBACK_TRIGGER.to_string());

    let duck_assist_level = match store.get(DUCK_ASSIST)? {
        Some(raw) => DuckAssistLevel::from_setting(&raw).unwrap_or_else(|| {
            tracing::warn!(value = %raw, "Ignoring malformed DuckAssist setting");
            DuckAssistLevel::default()
        }),
        None => DuckAssistLevel::default(),
    };

    Ok(Settings {
        default_trigger,
        multi_bang_enabled: read_bool(store, MULTI_BANG_ENABLED, true)?,
        reddit_site_search: read_bool(store, REDDIT_SITE_SEARCH, true)?,
        disable_ddg_ads: read_bool(store, DISABLE_DDG_ADS, true)?,
        disable_ddg_promos: read_bool(store, DISABLE_DDG_PROMOS, true)?,
        duck_assist_level,
        disable_google_ai: read_bool(store, DISABLE_GOOGLE_AI, false)?,
    })
}

/// Load the persisted custom bang list.
///
/// A value that fails to deserialize is treated as an empty list and reset.
pub fn read_custom_bangs(store: &dyn SettingsStore) -> Result<Vec<BangDefinition>> {
    let Some(raw) = store.get(CUSTOM_BANGS)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str(&raw) {
        Ok(bangs) => Ok(bangs),
        Err(err) => {
            tracing::warn!(error = %err, "Custom bangs are corrupted, resetting to an empty list");
            store.set(CUSTOM_BANGS, "[]")?;
            Ok(Vec::new())
        }
    }
}

pub fn write_custom_bangs(store: &dyn SettingsStore, bangs: &[BangDefinition]) -> Result<()> {
    let raw = serde_json::to_string(bangs)?;
    store.set(CUSTOM_BANGS, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySettingsStore;

    #[test]
    fn test_absent_keys_use_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(read_settings(&store).unwrap(), Settings::default());
    }

    #[test]
    fn test_boolean_serialization() {
        let store = MemorySettingsStore::with_entries([
            (MULTI_BANG_ENABLED, "false"),
            (DISABLE_GOOGLE_AI, "true"),
            // Not the literal "true", so it reads as false
            (DISABLE_DDG_ADS, "yes"),
        ]);

        let settings = read_settings(&store).unwrap();
        assert!(!settings.multi_bang_enabled);
        assert!(settings.disable_google_ai);
        assert!(!settings.disable_ddg_ads);
        assert!(settings.disable_ddg_promos);
    }

    #[test]
    fn test_write_bool_round_trips() {
        let store = MemorySettingsStore::new();
        write_bool(&store, REDDIT_SITE_SEARCH, false).unwrap();

        assert_eq!(store.get(REDDIT_SITE_SEARCH).unwrap(), Some("false".to_string()));
        assert!(!read_settings(&store).unwrap().reddit_site_search);
    }

    #[test]
    fn test_malformed_duck_assist_falls_back() {
        let store = MemorySettingsStore::with_entries([(DUCK_ASSIST, "loud")]);
        let settings = read_settings(&store).unwrap();
        assert_eq!(settings.duck_assist_level, DuckAssistLevel::Sometimes);
    }

    #[test]
    fn test_empty_default_trigger_is_kept_verbatim() {
        let store = MemorySettingsStore::with_entries([(DEFAULT_BANG, "")]);
        assert_eq!(read_settings(&store).unwrap().default_trigger, "");
    }

    #[test]
    fn test_custom_bangs_round_trip() {
        let store = MemorySettingsStore::new();
        let bangs = vec![BangDefinition::new("gpt", "chatgpt.com", "https://chatgpt.com/?q=%s")];

        write_custom_bangs(&store, &bangs).unwrap();
        assert_eq!(
            store.get(CUSTOM_BANGS).unwrap().unwrap(),
            r#"[{"t":"gpt","d":"chatgpt.com","u":"https://chatgpt.com/?q=%s"}]"#
        );
        assert_eq!(read_custom_bangs(&store).unwrap(), bangs);
    }

    #[test]
    fn test_corrupted_custom_bangs_reset_to_empty() {
        let store = MemorySettingsStore::with_entries([(CUSTOM_BANGS, "{not json")]);

        assert!(read_custom_bangs(&store).unwrap().is_empty());
        assert_eq!(store.get(CUSTOM_BANGS).unwrap(), Some("[]".to_string()));
    }
}
