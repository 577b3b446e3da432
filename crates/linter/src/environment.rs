//! Rule environments: named presets of predefined globals

use javascript_globals::GLOBALS;

use crate::LintError;

/// Always enabled, the ECMAScript built-ins
const BUILTIN: &str = "builtin";

/// The set of enabled global presets
#[derive(Debug, Clone)]
pub struct Environments {
    names: Vec<String>,
}

impl Default for Environments {
    fn default() -> Self {
        Self { names: vec![BUILTIN.to_string()] }
    }
}

impl Environments {
    /// Resolve environment names, failing on the first unknown one
    pub fn new<I, S>(names: I) -> Result<Self, LintError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut envs = Self::default();
        for name in names {
            envs.enable(name.as_ref())?;
        }
        Ok(envs)
    }

    pub fn enable(&mut self, name: &str) -> Result<(), LintError> {
        if !GLOBALS.contains_key(name) {
            return Err(LintError::UnknownEnvironment(name.to_string()));
        }
        if !self.names.iter().any(|n| n == name) {
            self.names.push(name.to_string());
        }
        Ok(())
    }

    /// Whether any enabled environment defines `global`
    pub fn contains(&self, global: &str) -> bool {
        self.names
            .iter()
            .any(|env| GLOBALS.get(env.as_str()).is_some_and(|globals| globals.contains_key(global)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
