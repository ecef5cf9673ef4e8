//! Observability: tracing setup and in-process counters

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

pub const DEFAULT_LOG_FILTER: &str = "quackly=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, else the configured `log_filter`, else
/// [`DEFAULT_LOG_FILTER`].
pub fn init_tracing(config: &TelemetryConfig) {
    let configured = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Metrics handle for recording counters
#[derive(Debug, Default)]
pub struct Metrics {
    redirects: AtomicU64,
    multi_dispatches: AtomicU64,
    search_pages: AtomicU64,
    settings_changes: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirect(&self) {
        self.redirects.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "redirects", "Metric incremented");
    }

    pub fn multi_dispatch(&self) {
        self.multi_dispatches.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "multi_dispatches", "Metric incremented");
    }

    pub fn search_page(&self) {
        self.search_pages.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "search_pages", "Metric incremented");
    }

    pub fn settings_changed(&self) {
        self.settings_changes.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "settings_changes", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            redirects: self.redirects.load(Ordering::Relaxed),
            multi_dispatches: self.multi_dispatches.load(Ordering::Relaxed),
            search_pages: self.search_pages.load(Ordering::Relaxed),
            settings_changes: self.settings_changes.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub redirects: u64,
    pub multi_dispatches: u64,
    pub search_pages: u64,
    pub settings_changes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = Metrics::new();
        metrics.redirect();
        metrics.redirect();
        metrics.multi_dispatch();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.redirects, 2);
        assert_eq!(snapshot.multi_dispatches, 1);
        assert_eq!(snapshot.search_pages, 0);
        assert_eq!(snapshot.settings_changes, 0);
    }
}
