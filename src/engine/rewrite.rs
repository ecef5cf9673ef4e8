//! Conditional query and URL rewrites tied to user settings
//!
//! The provider rules only fire when the selected bang is in use as the
//! default. Google's rule edits the query text before encoding; DuckDuckGo's
//! rules append parameters to the already-built URL.

use crate::settings::{DuckAssistLevel, Settings};

use super::selector::Selection;

pub const REDDIT_TRIGGER: &str = "r";
pub const REDDIT_SITE_FILTER: &str = "site:reddit.com";

const GOOGLE_TRIGGER: &str = "g";
const GOOGLE_NO_AI: &str = " -ai";

const DDG_TRIGGER: &str = "ddg";
const DDG_NO_ADS: &str = "&k1=-1";
const DDG_NO_PROMOS: &str = "&kak=-1&kax=-1&kaq=-1&kap=-1";

/// Whether `!r` should be turned into a site-restricted default search
pub fn reddit_rewrite_applies(trigger: Option<&str>, settings: &Settings) -> bool {
    trigger == Some(REDDIT_TRIGGER) && settings.reddit_site_search
}

pub fn reddit_site_query(query: &str) -> String {
    format!("{query} {REDDIT_SITE_FILTER}").trim().to_string()
}

/// Query-text rules, applied before URL encoding
pub fn rewrite_query(selection: &Selection<'_>, settings: &Settings) -> String {
    let mut query = selection.query.clone();

    if selection.default_in_use
        && selection.bang.trigger == GOOGLE_TRIGGER
        && settings.disable_google_ai
    {
        query.push_str(GOOGLE_NO_AI);
    }

    query
}

/// URL rules, applied after the template has been expanded
pub fn rewrite_url(selection: &Selection<'_>, mut url: String, settings: &Settings) -> String {
    if !selection.default_in_use || selection.bang.trigger != DDG_TRIGGER {
        return url;
    }

    if settings.disable_ddg_ads {
        url.push_str(DDG_NO_ADS);
    }
    if settings.disable_ddg_promos {
        url.push_str(DDG_NO_PROMOS);
    }
    if settings.duck_assist_level != DuckAssistLevel::Sometimes {
        url.push_str("&kbe=");
        url.push_str(settings.duck_assist_level.as_str());
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bangs::BangRegistry;

    fn selection<'a>(
        registry: &'a BangRegistry,
        trigger: &str,
        default_in_use: bool,
    ) -> Selection<'a> {
        Selection {
            bang: registry.get(trigger).unwrap(),
            query: "rust".to_string(),
            default_in_use,
        }
    }

    #[test]
    fn test_reddit_rewrite_gate() {
        let settings = Settings::default();
        assert!(reddit_rewrite_applies(Some("r"), &settings));
        assert!(!reddit_rewrite_applies(Some("g"), &settings));
        assert!(!reddit_rewrite_applies(None, &settings));

        let disabled = Settings::builder().reddit_site_search(false).build();
        assert!(!reddit_rewrite_applies(Some("r"), &disabled));
    }

    #[test]
    fn test_reddit_site_query_trims() {
        assert_eq!(reddit_site_query("cats"), "cats site:reddit.com");
        assert_eq!(reddit_site_query(""), "site:reddit.com");
    }

    #[test]
    fn test_google_rule_requires_default_and_toggle() {
        let registry = BangRegistry::with_builtins();
        let settings = Settings::builder().disable_google_ai(true).build();

        assert_eq!(rewrite_query(&selection(&registry, "g", true), &settings), "rust -ai");
        assert_eq!(rewrite_query(&selection(&registry, "g", false), &settings), "rust");
        assert_eq!(
            rewrite_query(&selection(&registry, "g", true), &Settings::default()),
            "rust"
        );
    }

    #[test]
    fn test_ddg_rule_parameter_order() {
        let registry = BangRegistry::with_builtins();
        let settings = Settings::builder()
            .duck_assist_level(DuckAssistLevel::Never)
            .build();

        let url = rewrite_url(&selection(&registry, "ddg", true), "u".to_string(), &settings);
        assert_eq!(url, "u&k1=-1&kak=-1&kax=-1&kaq=-1&kap=-1&kbe=0");
    }

    #[test]
    fn test_ddg_rule_toggles() {
        let registry = BangRegistry::with_builtins();
        let settings = Settings::builder()
            .disable_ddg_ads(false)
            .disable_ddg_promos(false)
            .build();
        let ddg = selection(&registry, "ddg", true);

        assert_eq!(rewrite_url(&ddg, "u".to_string(), &settings), "u");
        assert_eq!(
            rewrite_url(&selection(&registry, "ddg", false), "u".to_string(), &Settings::default()),
            "u"
        );
        assert_eq!(
            rewrite_url(&selection(&registry, "g", true), "u".to_string(), &Settings::default()),
            "u"
        );
    }
}
