use thiserror::Error;
use url::Url;

use super::registry::BangRegistry;
use super::types::{BangDefinition, PLACEHOLDERS};

/// Display domain used when a template's host cannot be parsed
pub const FALLBACK_DOMAIN: &str = "custom.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BangError {
    #[error("bang trigger cannot be empty")]
    EmptyTrigger,
    #[error("URL template cannot be empty")]
    EmptyTemplate,
    #[error("URL template must contain {{{{{{s}}}}}} or %s for the search query")]
    MissingPlaceholder,
    #[error("bang !{0} already exists")]
    Duplicate(String),
    #[error("bang !{0} does not exist")]
    Unknown(String),
}

/// Normalize user input into a trigger: trimmed, lower-cased, one leading `!` removed
pub fn clean_trigger(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    match lowered.strip_prefix('!') {
        Some(rest) => rest.to_string(),
        None => lowered,
    }
}

/// A user-added bang that passed validation against a registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomBang(BangDefinition);

impl CustomBang {
    /// Validate raw user input and derive the display domain.
    ///
    /// Templates without an http(s) scheme get `https://` prepended.
    pub fn parse(
        trigger: &str,
        url_template: &str,
        registry: &BangRegistry,
    ) -> Result<Self, BangError> {
        let trigger = clean_trigger(trigger);
        if trigger.is_empty() {
            return Err(BangError::EmptyTrigger);
        }

        let url_template = normalize_template(url_template)?;
        if !PLACEHOLDERS.iter().any(|p| url_template.contains(p)) {
            return Err(BangError::MissingPlaceholder);
        }

        if registry.contains(&trigger) {
            return Err(BangError::Duplicate(trigger));
        }

        let domain = display_domain(&url_template);
        Ok(Self(BangDefinition::new(trigger, domain, url_template)))
    }

    pub fn definition(&self) -> &BangDefinition {
        &self.0
    }

    pub fn into_definition(self) -> BangDefinition {
        self.0
    }
}

fn normalize_template(input: &str) -> Result<String, BangError> {
    let template = input.trim();
    if template.is_empty() {
        return Err(BangError::EmptyTemplate);
    }

    let lowered = template.to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        Ok(template.to_string())
    } else {
        Ok(format!("https://{template}"))
    }
}

/// Host of the template part preceding the first placeholder
fn display_domain(template: &str) -> String {
    let cut = PLACEHOLDERS
        .iter()
        .filter_map(|placeholder| template.find(placeholder))
        .min()
        .unwrap_or(template.len());

    Url::parse(&template[..cut])
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| {
            tracing::debug!(template, "Could not parse domain for custom bang");
            FALLBACK_DOMAIN.to_string()
        })
}
