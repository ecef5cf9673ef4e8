//! Bang resolution engine
//!
//! Turns a raw query into one or more destination URLs. The engine is a pure
//! function of (query, registry, settings): it never touches storage and
//! produces byte-identical output for identical inputs.
//!
//! Control flow:
//!
//! ```text
//! query -> strategy (tokenizer | legacy) -> selector (+ rewrite rules)
//!       -> template expansion -> ResolvedRequest -> dispatch
//! ```
//!
//! ## Example
//!
//! ```rust
//! use quackly::bangs::BangRegistry;
//! use quackly::engine::{self, ResolvedRequest};
//! use quackly::settings::Settings;
//!
//! let registry = BangRegistry::with_builtins();
//! let resolved = engine::resolve("!w ferris", &registry, &Settings::default());
//!
//! assert_eq!(
//!     resolved,
//!     Some(ResolvedRequest::Single {
//!         url: "https://en.wikipedia.org/wiki/Special:Search?search=ferris".into(),
//!         strategy: engine::ParseStrategy::MultiBang,
//!     })
//! );
//! ```

pub mod dispatch;
pub mod multibang;
pub mod rewrite;
pub mod selector;
pub mod strategy;
pub mod template;
pub mod tokenizer;

use serde::Serialize;
use tracing::debug;

use crate::bangs::BangRegistry;
use crate::settings::Settings;

pub use dispatch::{BrowsingContext, DispatchOutcome, FallbackAffordance, RecordingContext, dispatch};
pub use multibang::{MultiDestination, resolve_destinations, split_triggers};
pub use selector::Selection;
pub use strategy::{ParseStrategy, ParsedQuery};

/// Engine decision for a non-empty query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolvedRequest {
    Single {
        url: String,
        strategy: ParseStrategy,
    },
    Multi(MultiDestination),
}

impl ResolvedRequest {
    pub fn primary_url(&self) -> Option<&str> {
        match self {
            ResolvedRequest::Single { url, .. } => Some(url.as_str()),
            ResolvedRequest::Multi(multi) => multi.primary_url(),
        }
    }

    pub fn additional_urls(&self) -> &[String] {
        match self {
            ResolvedRequest::Single { .. } => &[],
            ResolvedRequest::Multi(multi) => multi.additional_urls(),
        }
    }
}

/// Resolve a raw query.
///
/// Returns `None` for an empty (or whitespace-only) query, which callers
/// answer with the interactive search surface.
pub fn resolve(query: &str, registry: &BangRegistry, settings: &Settings) -> Option<ResolvedRequest> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }

    let resolved = match strategy::parse(query, registry, settings.multi_bang_enabled) {
        ParsedQuery::Multi(scan) => ResolvedRequest::Multi(resolve_destinations(
            &scan.residual,
            scan.triggers,
            registry,
            settings,
        )),
        ParsedQuery::Single {
            strategy,
            candidate,
        } => {
            let url = match selector::select(&candidate, registry, settings) {
                Some(selection) => destination(&selection, settings),
                None => {
                    debug!("No bang resolvable, using hard fallback");
                    template::hard_fallback_url(query)
                }
            };
            ResolvedRequest::Single { url, strategy }
        }
    };

    debug!(query, resolved = ?resolved, "Query resolved");
    Some(resolved)
}

/// Build the destination URL for a selected bang.
///
/// An empty query goes to the bang's bare domain; otherwise the query rules
/// run, the template is expanded, then the URL rules run.
pub fn destination(selection: &Selection<'_>, settings: &Settings) -> String {
    if selection.query.is_empty() {
        return format!("https://{}", selection.bang.domain);
    }

    let query = rewrite::rewrite_query(selection, settings);
    let url = template::expand(&selection.bang.url_template, &query);
    rewrite::rewrite_url(selection, url, settings)
}
