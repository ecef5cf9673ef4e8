use serde::{Deserialize, Serialize};

/// Query placeholders accepted inside a URL template
pub const PLACEHOLDERS: [&str; 2] = ["{{{s}}}", "%s"];

/// A single bang: trigger, display domain and URL template.
///
/// Serialized with the short field names used by the persisted custom list
/// (`{"t": .., "d": .., "u": ..}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BangDefinition {
    /// Trigger without the leading `!`, lower-case
    #[serde(rename = "t")]
    pub trigger: String,
    /// Bare domain used when the query is empty after bang removal
    #[serde(rename = "d")]
    pub domain: String,
    #[serde(rename = "u")]
    pub url_template: String,
}

impl BangDefinition {
    pub fn new(
        trigger: impl Into<String>,
        domain: impl Into<String>,
        url_template: impl Into<String>,
    ) -> Self {
        Self {
            trigger: trigger.into(),
            domain: domain.into(),
            url_template: url_template.into(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        PLACEHOLDERS
            .iter()
            .any(|placeholder| self.url_template.contains(placeholder))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_short_field_names() {
        let bang = BangDefinition::new("gpt", "chatgpt.com", "https://chatgpt.com/?q=%s");
        let json = serde_json::to_value(&bang).unwrap();

        assert_eq!(json["t"], "gpt");
        assert_eq!(json["d"], "chatgpt.com");
        assert_eq!(json["u"], "https://chatgpt.com/?q=%s");
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(BangDefinition::new("a", "a.com", "https://a.com/?q={{{s}}}").has_placeholder());
        assert!(BangDefinition::new("a", "a.com", "https://a.com/?q=%s").has_placeholder());
        assert!(!BangDefinition::new("a", "a.com", "https://a.com/").has_placeholder());
    }
}
