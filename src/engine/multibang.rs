use serde::Serialize;
use tracing::warn;

use crate::bangs::BangRegistry;
use crate::settings::Settings;

use super::destination;
use super::selector;
use super::strategy::CandidateQuery;

/// Ordered destinations for a query carrying several bangs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiDestination {
    /// Residual query shared by every destination
    pub query: String,
    /// Requested triggers, in order of appearance
    pub triggers: Vec<String>,
    /// One URL per resolvable trigger, same order
    pub urls: Vec<String>,
}

impl MultiDestination {
    /// Destination that replaces the current page
    pub fn primary_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Destinations opened in new browsing contexts
    pub fn additional_urls(&self) -> &[String] {
        self.urls.get(1..).unwrap_or_default()
    }
}

/// Split a comma-separated trigger list, dropping empty entries
pub fn split_triggers(bangs: &str) -> Vec<String> {
    bangs
        .split(',')
        .map(|trigger| trigger.trim().to_lowercase())
        .filter(|trigger| !trigger.is_empty())
        .collect()
}

/// Build one destination per trigger from the shared residual query.
///
/// Unknown triggers are dropped. Each trigger is judged on its own for the
/// provider rewrite rules.
pub fn resolve_destinations(
    query: &str,
    triggers: Vec<String>,
    registry: &BangRegistry,
    settings: &Settings,
) -> MultiDestination {
    let mut urls = Vec::with_capacity(triggers.len());

    for trigger in &triggers {
        if !registry.contains(trigger) {
            warn!(trigger = %trigger, "Skipping unknown bang in multi-bang request");
            continue;
        }

        let candidate = CandidateQuery {
            trigger: Some(trigger.clone()),
            clean_query: query.to_string(),
        };
        match selector::select(&candidate, registry, settings) {
            Some(selection) => urls.push(destination(&selection, settings)),
            None => warn!(trigger = %trigger, "No default bang available, skipping"),
        }
    }

    MultiDestination {
        query: query.to_string(),
        triggers,
        urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triggers(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_split_triggers() {
        assert_eq!(split_triggers("g,W,,ddg"), vec!["g", "w", "ddg"]);
        assert_eq!(split_triggers(" g , yt "), vec!["g", "yt"]);
        assert!(split_triggers(",,").is_empty());
    }

    #[test]
    fn test_unknown_triggers_are_dropped() {
        let registry = BangRegistry::with_builtins();
        let destination = resolve_destinations(
            "rust",
            triggers(&["zzz", "w", "nope"]),
            &registry,
            &Settings::default(),
        );

        assert_eq!(destination.triggers.len(), 3);
        assert_eq!(
            destination.urls,
            vec!["https://en.wikipedia.org/wiki/Special:Search?search=rust"]
        );
        assert_eq!(
            destination.primary_url(),
            Some("https://en.wikipedia.org/wiki/Special:Search?search=rust")
        );
        assert!(destination.additional_urls().is_empty());
    }

    #[test]
    fn test_all_unknown_yields_empty_plan() {
        let registry = BangRegistry::with_builtins();
        let destination =
            resolve_destinations("rust", triggers(&["zzz"]), &registry, &Settings::default());

        assert!(destination.urls.is_empty());
        assert_eq!(destination.primary_url(), None);
        assert!(destination.additional_urls().is_empty());
    }

    #[test]
    fn test_rules_apply_per_trigger() {
        let registry = BangRegistry::with_builtins();
        let settings = Settings::builder()
            .default_trigger("g")
            .disable_google_ai(true)
            .build();

        let destination =
            resolve_destinations("cats", triggers(&["g", "ddg"]), &registry, &settings);
        assert_eq!(
            destination.urls,
            vec![
                "https://www.google.com/search?q=cats%20-ai",
                "https://duckduckgo.com/?q=cats",
            ]
        );
    }

    #[test]
    fn test_empty_query_uses_bare_domains() {
        let registry = BangRegistry::with_builtins();
        let destination =
            resolve_destinations("", triggers(&["g", "w"]), &registry, &Settings::default());

        assert_eq!(
            destination.urls,
            vec!["https://google.com", "https://en.wikipedia.org"]
        );
    }
}
