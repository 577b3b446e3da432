//! Engine options shared by the server configuration and the linter

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Severity;

/// File name passed to the engine when the caller does not supply one
pub const PLACEHOLDER_FILE_NAME: &str = "tempfile.js";

/// Formatter used when neither the caller nor the configuration picks one
pub const DEFAULT_FORMATTER: &str = "stylish";

/// Configured level of a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    Off,
    Warn,
    Error,
}

impl RuleSeverity {
    /// Severity stamped on reported messages, `None` when the rule is disabled
    pub fn to_severity(self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

impl FromStr for RuleSeverity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" | "0" => Ok(Self::Off),
            "warn" | "1" => Ok(Self::Warn),
            "error" | "2" => Ok(Self::Error),
            other => Err(format!("unknown rule severity `{other}`, expected off, warn or error")),
        }
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// Rule environment, plugins and per-rule overrides applied when the engine is built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Named global presets, e.g. `browser` or `node`
    pub envs: Vec<String>,
    /// Statically registered plugin names
    pub plugins: Vec<String>,
    /// Rule id to severity overrides
    pub rules: BTreeMap<String, RuleSeverity>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            envs: vec!["browser".to_string()],
            plugins: vec!["security".to_string()],
            rules: BTreeMap::new(),
        }
    }
}

impl EngineOptions {
    /// Options with no environments, plugins or overrides
    pub fn empty() -> Self {
        Self { envs: Vec::new(), plugins: Vec::new(), rules: BTreeMap::new() }
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.envs.push(env.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>, severity: RuleSeverity) -> Self {
        self.rules.insert(rule.into(), severity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_browser_profile() {
        let options = EngineOptions::default();
        assert_eq!(options.envs, vec!["browser"]);
        assert_eq!(options.plugins, vec!["security"]);
        assert!(options.rules.is_empty());
    }

    #[test]
    fn test_rule_severity_parsing() {
        assert_eq!("warn".parse::<RuleSeverity>(), Ok(RuleSeverity::Warn));
        assert_eq!("2".parse::<RuleSeverity>(), Ok(RuleSeverity::Error));
        assert!("loud".parse::<RuleSeverity>().is_err());
        assert_eq!(RuleSeverity::Off.to_severity(), None);
        assert_eq!(RuleSeverity::Warn.to_severity(), Some(Severity::Warning));
    }
}
