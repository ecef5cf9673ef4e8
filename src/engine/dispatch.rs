//! Same-page vs. multi-tab dispatch for multi-destination requests
//!
//! The host environment (a browser page, or a dry run on the command line) is
//! abstracted as a [`BrowsingContext`]. Opening a new context reports success
//! synchronously; a blocked open is an expected outcome, never an error, and is
//! never retried automatically.

use tracing::{debug, warn};

use super::multibang::MultiDestination;

/// Host environment able to open new browsing contexts and navigate itself
pub trait BrowsingContext {
    /// Try to open `url` in a new browsing context; `false` when blocked
    fn open(&mut self, url: &str) -> bool;

    /// Replace the current location without keeping a history entry
    fn replace_location(&mut self, url: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Every additional URL opened and the current page moved to the primary
    Redirected { primary: String, opened: usize },
    /// Some opens were blocked (or nothing resolved); the user must retry
    Fallback(FallbackAffordance),
}

/// Manual "open all" action offered when automatic opening failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackAffordance {
    urls: Vec<String>,
    completed: bool,
}

impl FallbackAffordance {
    pub fn new(urls: Vec<String>) -> Self {
        Self {
            urls,
            completed: false,
        }
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Already used; further activations do nothing
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Explicit user action: open every URL, primary included, once.
    ///
    /// Returns how many opened.
    pub fn activate(&mut self, context: &mut impl BrowsingContext) -> usize {
        if self.completed {
            return 0;
        }

        let opened = self.urls.iter().filter(|url| context.open(url)).count();
        self.completed = true;
        debug!(opened, total = self.urls.len(), "Fallback affordance activated");
        opened
    }
}

/// Open the additional URLs, then move the current page to the primary URL
/// only if none were blocked and at least one URL exists
pub fn dispatch(destination: &MultiDestination, context: &mut impl BrowsingContext) -> DispatchOutcome {
    let additional = destination.additional_urls();
    let opened = additional.iter().filter(|url| context.open(url)).count();

    match destination.primary_url() {
        Some(primary) if opened == additional.len() => {
            context.replace_location(primary);
            DispatchOutcome::Redirected {
                primary: primary.to_string(),
                opened,
            }
        }
        _ => {
            warn!(
                opened,
                requested = additional.len(),
                "New browsing contexts were blocked, offering manual fallback"
            );
            DispatchOutcome::Fallback(FallbackAffordance::new(destination.urls.clone()))
        }
    }
}

/// Browsing context that records what it was asked to do.
///
/// Used for dry runs and tests. An optional popup budget models a blocker
/// that lets only the first `n` opens through.
#[derive(Debug, Clone, Default)]
pub struct RecordingContext {
    popup_budget: Option<usize>,
    pub opened: Vec<String>,
    pub blocked: Vec<String>,
    pub location: Option<String>,
}

impl RecordingContext {
    /// Every open succeeds
    pub fn allowing() -> Self {
        Self::default()
    }

    /// Every open is blocked
    pub fn blocking() -> Self {
        Self::with_popup_budget(0)
    }

    pub fn with_popup_budget(budget: usize) -> Self {
        Self {
            popup_budget: Some(budget),
            ..Self::default()
        }
    }
}

impl BrowsingContext for RecordingContext {
    fn open(&mut self, url: &str) -> bool {
        let allowed = self
            .popup_budget
            .is_none_or(|budget| self.opened.len() < budget);

        if allowed {
            self.opened.push(url.to_string());
        } else {
            self.blocked.push(url.to_string());
        }
        allowed
    }

    fn replace_location(&mut self, url: &str) {
        self.location = Some(url.to_string());
    }
}
