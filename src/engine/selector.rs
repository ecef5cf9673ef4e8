use crate::bangs::{BangDefinition, BangRegistry};
use crate::settings::{FALLBACK_TRIGGER, Settings};

use super::rewrite;
use super::strategy::CandidateQuery;

/// Bang chosen for a candidate, with the query it should search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    pub bang: &'a BangDefinition,
    pub query: String,
    /// Provider rewrite rules apply only while this is set
    pub default_in_use: bool,
}

/// The configured default bang, or the built-in fallback when the configured
/// trigger is unset or missing from the registry
pub fn default_bang<'a>(
    registry: &'a BangRegistry,
    settings: &Settings,
) -> Option<&'a BangDefinition> {
    registry
        .get(&settings.default_trigger)
        .or_else(|| registry.get_builtin(FALLBACK_TRIGGER))
}

/// Resolve a candidate trigger to a registry entry.
///
/// Returns `None` only when neither the candidate nor any default can be
/// resolved, which callers turn into the hard fallback destination.
pub fn select<'a>(
    candidate: &CandidateQuery,
    registry: &'a BangRegistry,
    settings: &Settings,
) -> Option<Selection<'a>> {
    let trigger = candidate.trigger.as_deref();

    if rewrite::reddit_rewrite_applies(trigger, settings) {
        return default_bang(registry, settings).map(|bang| Selection {
            bang,
            query: rewrite::reddit_site_query(&candidate.clean_query),
            default_in_use: true,
        });
    }

    let bang = trigger
        .and_then(|trigger| registry.get(trigger))
        .or_else(|| default_bang(registry, settings))?;

    let is_default = bang.trigger == settings.default_trigger;
    let default_in_use = match trigger {
        None => is_default,
        Some(trigger) => bang.trigger == trigger && is_default,
    };

    Some(Selection {
        bang,
        query: candidate.clean_query.clone(),
        default_in_use,
    })
}
