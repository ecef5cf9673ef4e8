use std::sync::Arc;

use crate::config::Config;
use crate::observability::Metrics;
use crate::settings::SettingsService;
use crate::store::SettingsStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub settings: SettingsService,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn SettingsStore>) -> Self {
        Self {
            config: Arc::new(config),
            settings: SettingsService::new(store),
            metrics: Arc::new(Metrics::new()),
        }
    }
}
