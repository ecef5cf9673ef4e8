use bon::Builder;
use serde::{Deserialize, Serialize};

/// Trigger used when the configured default is unset or unknown
pub const FALLBACK_TRIGGER: &str = "ddg";

/// How often DuckDuckGo shows AI-generated answers (`kbe` parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DuckAssistLevel {
    #[serde(rename = "0")]
    Never,
    #[serde(rename = "1")]
    OnDemand,
    /// DuckDuckGo's own default; no parameter is emitted for it
    #[default]
    #[serde(rename = "2")]
    Sometimes,
    #[serde(rename = "3")]
    Often,
}

impl DuckAssistLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DuckAssistLevel::Never => "0",
            DuckAssistLevel::OnDemand => "1",
            DuckAssistLevel::Sometimes => "2",
            DuckAssistLevel::Often => "3",
        }
    }

    /// Parse the persisted representation ("0".."3")
    pub fn from_setting(value: &str) -> Option<Self> {
        match value {
            "0" => Some(DuckAssistLevel::Never),
            "1" => Some(DuckAssistLevel::OnDemand),
            "2" => Some(DuckAssistLevel::Sometimes),
            "3" => Some(DuckAssistLevel::Often),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DuckAssistLevel::Never => "Never",
            DuckAssistLevel::OnDemand => "On-Demand",
            DuckAssistLevel::Sometimes => "Sometimes",
            DuckAssistLevel::Often => "Often",
        }
    }
}

/// Read-only settings snapshot that parameterizes resolution
///
/// Every field has a documented default used when the persisted key is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[builder(into, default = FALLBACK_TRIGGER.to_string())]
    pub default_trigger: String,
    #[builder(default = true)]
    pub multi_bang_enabled: bool,
    /// Rewrite `!r` into a `site:reddit.com` search on the default engine
    #[builder(default = true)]
    pub reddit_site_search: bool,
    #[builder(default = true)]
    pub disable_ddg_ads: bool,
    #[builder(default = true)]
    pub disable_ddg_promos: bool,
    #[builder(default)]
    pub duck_assist_level: DuckAssistLevel,
    #[builder(default)]
    pub disable_google_ai: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Partial update of the settings snapshot; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsPatch {
    pub default_trigger: Option<String>,
    pub multi_bang_enabled: Option<bool>,
    pub reddit_site_search: Option<bool>,
    pub disable_ddg_ads: Option<bool>,
    pub disable_ddg_promos: Option<bool>,
    pub duck_assist_level: Option<DuckAssistLevel>,
    pub disable_google_ai: Option<bool>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.default_trigger.is_none()
            && self.multi_bang_enabled.is_none()
            && self.reddit_site_search.is_none()
            && self.disable_ddg_ads.is_none()
            && self.disable_ddg_promos.is_none()
            && self.duck_assist_level.is_none()
            && self.disable_google_ai.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        let settings = Settings::default();

        assert_eq!(settings.default_trigger, "ddg");
        assert!(settings.multi_bang_enabled);
        assert!(settings.reddit_site_search);
        assert!(settings.disable_ddg_ads);
        assert!(settings.disable_ddg_promos);
        assert_eq!(settings.duck_assist_level, DuckAssistLevel::Sometimes);
        assert!(!settings.disable_google_ai);
    }

    #[test]
    fn test_builder_overrides() {
        let settings = Settings::builder()
            .default_trigger("g")
            .disable_google_ai(true)
            .multi_bang_enabled(false)
            .build();

        assert_eq!(settings.default_trigger, "g");
        assert!(settings.disable_google_ai);
        assert!(!settings.multi_bang_enabled);
        assert!(settings.reddit_site_search);
    }

    #[test]
    fn test_duck_assist_level_parsing() {
        for level in ["0", "1", "2", "3"] {
            let parsed = DuckAssistLevel::from_setting(level).unwrap();
            assert_eq!(parsed.as_str(), level);
        }
        assert!(DuckAssistLevel::from_setting("4").is_none());
        assert!(DuckAssistLevel::from_setting("").is_none());
    }

    #[test]
    fn test_settings_json_uses_camel_case() {
        let json = serde_json::to_value(Settings::default()).unwrap();

        assert_eq!(json["defaultTrigger"], "ddg");
        assert_eq!(json["duckAssistLevel"], "2");
        assert_eq!(json["disableGoogleAi"], false);
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<SettingsPatch, _> = serde_json::from_str(r#"{"colour": "red"}"#);
        assert!(result.is_err());

        let patch: SettingsPatch = serde_json::from_str(r#"{"duckAssistLevel": "0"}"#).unwrap();
        assert_eq!(patch.duck_assist_level, Some(DuckAssistLevel::Never));
        assert!(!patch.is_empty());
        assert!(SettingsPatch::default().is_empty());
    }
}
