use std::collections::HashMap;

use super::builtin::builtin_bangs;
use super::types::BangDefinition;

/// Registry mapping triggers to bang definitions.
///
/// Built-in definitions come first, custom ones follow in append order.
/// Trigger uniqueness is enforced when custom bangs are added, not here: on a
/// duplicate trigger the first registered definition wins.
#[derive(Debug, Clone, Default)]
pub struct BangRegistry {
    bangs: Vec<BangDefinition>,
    builtin_len: usize,
    index: HashMap<String, usize>,
}

impl BangRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in table
    pub fn with_builtins() -> Self {
        Self::from_parts(builtin_bangs(), Vec::new())
    }

    /// Built-in table followed by the given custom bangs
    pub fn with_custom(custom: Vec<BangDefinition>) -> Self {
        Self::from_parts(builtin_bangs(), custom)
    }

    pub fn from_parts(builtin: Vec<BangDefinition>, custom: Vec<BangDefinition>) -> Self {
        let mut registry = Self::new();
        for bang in builtin {
            registry.register(bang);
        }
        registry.builtin_len = registry.bangs.len();
        for bang in custom {
            registry.register(bang);
        }
        registry
    }

    /// Append a definition; an existing trigger keeps its first definition
    pub fn register(&mut self, bang: BangDefinition) {
        let position = self.bangs.len();
        self.index.entry(bang.trigger.clone()).or_insert(position);
        self.bangs.push(bang);
    }

    /// Exact trigger lookup
    pub fn get(&self, trigger: &str) -> Option<&BangDefinition> {
        self.index.get(trigger).map(|&position| &self.bangs[position])
    }

    pub fn contains(&self, trigger: &str) -> bool {
        self.index.contains_key(trigger)
    }

    /// Lookup restricted to the built-in table
    pub fn get_builtin(&self, trigger: &str) -> Option<&BangDefinition> {
        self.builtins().iter().find(|bang| bang.trigger == trigger)
    }

    pub fn builtins(&self) -> &[BangDefinition] {
        &self.bangs[..self.builtin_len]
    }

    pub fn custom(&self) -> &[BangDefinition] {
        &self.bangs[self.builtin_len..]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BangDefinition> {
        self.bangs.iter()
    }

    pub fn len(&self) -> usize {
        self.bangs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bangs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_then_custom_order() {
        let custom = vec![BangDefinition::new("mine", "mine.dev", "https://mine.dev/?q=%s")];
        let registry = BangRegistry::with_custom(custom);

        assert_eq!(registry.custom().len(), 1);
        assert_eq!(registry.custom()[0].trigger, "mine");
        assert_eq!(registry.builtins().len(), builtin_bangs().len());
        assert_eq!(registry.len(), builtin_bangs().len() + 1);
        assert!(registry.contains("mine"));
    }

    #[test]
    fn test_duplicate_trigger_first_match_wins() {
        let custom = vec![BangDefinition::new("g", "evil.example", "https://evil.example/?q=%s")];
        let registry = BangRegistry::with_custom(custom);

        let google = registry.get("g").unwrap();
        assert_eq!(google.domain, "google.com");
        // The shadowed entry is still listed among the custom bangs
        assert_eq!(registry.custom()[0].domain, "evil.example");
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = BangRegistry::with_builtins();

        assert!(registry.get("g").is_some());
        assert!(registry.get("G").is_none());
        assert!(registry.get("!g").is_none());
    }

    #[test]
    fn test_get_builtin_ignores_custom() {
        let custom = vec![BangDefinition::new("mine", "mine.dev", "https://mine.dev/?q=%s")];
        let registry = BangRegistry::with_custom(custom);

        assert!(registry.get_builtin("ddg").is_some());
        assert!(registry.get_builtin("mine").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = BangRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("ddg").is_none());
        assert!(registry.builtins().is_empty());
        assert!(registry.custom().is_empty());
    }
}
