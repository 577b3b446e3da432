//! JavaScript lint engine
//!
//! This crate hosts a small rule set on top of the published oxc crates
//! and exposes the four operations a lint host needs:
//! 1. Build a [`Linter`] with environments, plugins and rule overrides
//! 2. Analyze source text with [`Linter::lint_text`]
//! 3. Look up a [`Formatter`] by name
//! 4. Render [`FileReport`]s with [`Formatter::format`]
//!
//! ```rust
//! use js_linter::Linter;
//!
//! let linter = Linter::builder().env("browser").build().unwrap();
//! let report = linter.lint_text("var x = 1", "tempfile.js").unwrap();
//! let text = linter.formatter("stylish").unwrap().format(&[report]);
//! assert!(text.contains("no-unused-vars"));
//! ```

pub mod environment;
pub mod formatter;
pub mod nesting;
pub mod plugins;
pub mod rules;
pub mod utils;
mod context;
mod diagnostic;
mod error;
mod linter;
mod visitor;
#[cfg(test)]
mod test_utils;

pub use common::{EngineOptions, FileReport, LintMessage, MessageFix, RuleSeverity, Severity};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, Fix};
pub use environment::Environments;
pub use error::LintError;
pub use formatter::Formatter;
pub use linter::{ConfiguredRule, Linter, LinterBuilder};
pub use plugins::Plugin;
pub use rules::Rule;
pub use visitor::LintRunner;

/// Rule category, which decides the default severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Code that is almost certainly wrong
    Correctness,
    /// Code that is likely wrong or dangerous
    Suspicious,
    /// Code that works but could be written more clearly
    Style,
}

impl RuleCategory {
    pub fn default_severity(self) -> RuleSeverity {
        match self {
            Self::Correctness | Self::Suspicious => RuleSeverity::Error,
            Self::Style => RuleSeverity::Warn,
        }
    }
}

/// Static rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
}
