//! Request and response shapes for the HTTP surface.
//!
//! JSON bodies use camelCase field names, matching the settings snapshot.
//!
//! ```json
//! POST /api/bangs/custom
//! { "trigger": "!gpt", "urlTemplate": "chatgpt.com/?q=%s" }
//!
//! 201 Created
//! { "trigger": "gpt", "domain": "chatgpt.com", "urlTemplate": "https://chatgpt.com/?q=%s" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::bangs::BangDefinition;
use crate::engine::ResolvedRequest;
use crate::observability::MetricsSnapshot;

/// `?q=` on the search and resolve routes
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `?q=&bangs=` on the multi-bang route
#[derive(Debug, Default, Deserialize)]
pub struct MultiBangParams {
    pub q: Option<String>,
    pub bangs: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCustomBang {
    pub trigger: String,
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BangResponse {
    pub trigger: String,
    pub domain: String,
    pub url_template: String,
}

impl From<&BangDefinition> for BangResponse {
    fn from(bang: &BangDefinition) -> Self {
        Self {
            trigger: bang.trigger.clone(),
            domain: bang.domain.clone(),
            url_template: bang.url_template.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CustomBangList {
    pub bangs: Vec<BangResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedBangResponse {
    pub removed: BangResponse,
    /// The removed bang was the default, which was reset to `ddg`
    pub default_reset: bool,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub query: String,
    /// `None` when the query is empty and the search page would be shown
    pub result: Option<ResolvedRequest>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub components: HashMap<String, String>,
    pub version: String,
    pub counters: MetricsSnapshot,
}
