//! Rule plugins
//!
//! Plugins are compiled in and looked up by name; every rule a plugin
//! contributes is registered under `<plugin>/<rule>`.

pub mod security;

pub use security::SecurityPlugin;

use crate::Rule;

/// A named bundle of rules
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn rules(&self) -> Vec<Box<dyn Rule>>;
}

/// Resolve a configured plugin name; the `eslint-plugin-` prefix is optional
pub fn resolve(name: &str) -> Option<Box<dyn Plugin>> {
    match name.strip_prefix("eslint-plugin-").unwrap_or(name) {
        SecurityPlugin::NAME => Some(Box::new(SecurityPlugin)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_plugin() {
        assert_eq!(resolve("security").map(|p| p.name()), Some("security"));
        assert_eq!(resolve("eslint-plugin-security").map(|p| p.name()), Some("security"));
    }

    #[test]
    fn test_resolve_unknown_plugin() {
        assert!(resolve("hms-plugins").is_none());
    }

    #[test]
    fn test_plugin_rule_ids_are_prefixed() {
        for rule in SecurityPlugin.rules() {
            assert!(rule.name().starts_with("security/"), "{}", rule.name());
        }
    }
}
