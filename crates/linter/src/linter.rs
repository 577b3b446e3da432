//! The lint engine: configuration, analysis and formatter lookup

use std::fmt;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use tracing::debug;

use common::{EngineOptions, FileReport, LineIndex, LintMessage, RuleSeverity, Severity};

use crate::rules::core_rules;
use crate::{nesting, plugins, Diagnostic, Environments, Formatter, LintContext, LintError, LintRunner, Plugin, Rule};

/// A rule together with the severity it reports at
pub struct ConfiguredRule {
    rule: Box<dyn Rule>,
    severity: Severity,
}

impl ConfiguredRule {
    pub(crate) fn new(rule: Box<dyn Rule>, severity: Severity) -> Self {
        Self { rule, severity }
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Debug for ConfiguredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfiguredRule")
            .field("rule", &self.rule.name())
            .field("severity", &self.severity)
            .finish()
    }
}

/// Builder for [`Linter`]
#[derive(Default)]
pub struct LinterBuilder {
    envs: Vec<String>,
    plugins: Vec<Box<dyn Plugin>>,
    overrides: Vec<(String, RuleSeverity)>,
}

impl LinterBuilder {
    /// Enable a rule environment, e.g. `browser`
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.envs.push(name.into());
        self
    }

    /// Register a plugin's rules
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Register a plugin looked up by name in the built-in registry
    pub fn plugin_named(mut self, name: &str) -> Result<Self, LintError> {
        let plugin = plugins::resolve(name).ok_or_else(|| LintError::UnknownPlugin(name.to_string()))?;
        self.plugins.push(plugin);
        Ok(self)
    }

    /// Override the severity of a rule; `off` disables it
    pub fn rule(mut self, name: impl Into<String>, severity: RuleSeverity) -> Self {
        self.overrides.push((name.into(), severity));
        self
    }

    pub fn build(self) -> Result<Linter, LintError> {
        let environments = Environments::new(&self.envs)?;

        let mut rules: Vec<Box<dyn Rule>> = core_rules();
        for plugin in &self.plugins {
            debug!(plugin = plugin.name(), "registering plugin rules");
            rules.extend(plugin.rules());
        }

        let mut levels: Vec<RuleSeverity> = rules.iter().map(|rule| rule.default_severity()).collect();
        for (name, severity) in &self.overrides {
            let index = rules
                .iter()
                .position(|rule| rule.name() == name.as_str())
                .ok_or_else(|| LintError::UnknownRule(name.clone()))?;
            levels[index] = *severity;
        }

        let rules = rules
            .into_iter()
            .zip(levels)
            .filter_map(|(rule, level)| {
                level.to_severity().map(|severity| ConfiguredRule::new(rule, severity))
            })
            .collect();

        Ok(Linter { rules, environments })
    }
}

/// A configured lint engine.
///
/// Built once and shared; analysis takes `&self` and allocates per call.
#[derive(Debug)]
pub struct Linter {
    rules: Vec<ConfiguredRule>,
    environments: Environments,
}

impl Linter {
    pub fn builder() -> LinterBuilder {
        LinterBuilder::default()
    }

    /// Build an engine from shared options, resolving plugins by name
    pub fn from_options(options: &EngineOptions) -> Result<Self, LintError> {
        let mut builder = Self::builder();
        for env in &options.envs {
            builder = builder.env(env.as_str());
        }
        for plugin in &options.plugins {
            builder = builder.plugin_named(plugin)?;
        }
        for (rule, severity) in &options.rules {
            builder = builder.rule(rule.as_str(), *severity);
        }
        builder.build()
    }

    pub fn rules(&self) -> &[ConfiguredRule] {
        &self.rules
    }

    pub fn environments(&self) -> &Environments {
        &self.environments
    }

    /// Analyze `source_text` as if it were the file `file_name`.
    ///
    /// Sources nested deeper than [`nesting`] allows are rejected before
    /// parsing. Anything within the limits still needs a thread stack well
    /// above the 2 MiB default.
    pub fn lint_text(&self, source_text: &str, file_name: &str) -> Result<FileReport, LintError> {
        nesting::check(source_text).map_err(|limit| LintError::TooDeep {
            file_name: file_name.to_string(),
            reason: limit.describe(),
        })?;

        let allocator = Allocator::default();
        let source_type = SourceType::from_path(file_name).unwrap_or(SourceType::mjs());

        let ret = Parser::new(&allocator, source_text, source_type).parse();
        if let Some(error) = ret.errors.first() {
            return Err(LintError::Parse {
                file_name: file_name.to_string(),
                message: error.to_string(),
            });
        }

        let semantic_ret = SemanticBuilder::new()
            .with_check_syntax_error(true)
            .build(&ret.program);
        if let Some(error) = semantic_ret.errors.first() {
            return Err(LintError::Parse {
                file_name: file_name.to_string(),
                message: error.to_string(),
            });
        }

        let ctx = LintContext::new(
            source_text,
            &ret.program,
            &semantic_ret.semantic,
            &self.environments,
        );
        let diagnostics = LintRunner::new(ctx, &self.rules).run();

        let line_index = LineIndex::new(source_text);
        let messages = diagnostics
            .into_iter()
            .map(|diagnostic| to_message(diagnostic, &line_index))
            .collect();

        let report = FileReport::new(file_name, messages);
        debug!(
            file = file_name,
            errors = report.error_count,
            warnings = report.warning_count,
            "linted source"
        );
        Ok(report)
    }

    /// Look up a report formatter by name
    pub fn formatter(&self, name: &str) -> Result<Formatter, LintError> {
        Formatter::from_name(name).ok_or_else(|| LintError::UnknownFormatter(name.to_string()))
    }
}

fn to_message(diagnostic: Diagnostic, line_index: &LineIndex<'_>) -> LintMessage {
    let (line, column) = line_index.line_col(diagnostic.span.start);
    let (end_line, end_column) = line_index.line_col(diagnostic.span.end);
    LintMessage {
        rule_id: Some(diagnostic.rule.to_string()),
        severity: diagnostic.severity,
        message: diagnostic.message,
        line,
        column,
        end_line: Some(end_line),
        end_column: Some(end_column),
        fix: diagnostic.fix.map(|fix| fix.into_message_fix()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linter() -> Linter {
        Linter::from_options(&EngineOptions::default()).unwrap()
    }

    #[test]
    fn test_clean_source_has_no_messages() {
        let report = linter().lint_text("var x = 1;\nconsole.log(x);\n", "tempfile.js").unwrap();
        assert!(report.is_clean(), "{:?}", report.messages);
    }

    #[test]
    fn test_unused_variable_reported_on_line_one() {
        let report = linter().lint_text("var x = 1", "tempfile.js").unwrap();
        assert_eq!(report.messages.len(), 1);
        let message = &report.messages[0];
        assert_eq!(message.rule_id.as_deref(), Some("no-unused-vars"));
        assert_eq!((message.line, message.column), (1, 5));
        assert!(message.message.contains("'x'"));
    }

    #[test]
    fn test_parse_error_fails() {
        let err = linter().lint_text("var s = \"unterminated;", "tempfile.js").unwrap_err();
        assert!(matches!(err, LintError::Parse { .. }));
        assert!(err.to_string().starts_with("tempfile.js: Parsing error"));
    }

    #[test]
    fn test_deeply_nested_source_fails() {
        let source = format!("var v = {}1{};", "(".repeat(3000), ")".repeat(3000));
        let err = linter().lint_text(&source, "tempfile.js").unwrap_err();
        assert!(matches!(err, LintError::TooDeep { .. }));
        assert_eq!(
            err.to_string(),
            "tempfile.js: Parsing error: brackets nested more than 256 levels deep, too deep to analyze"
        );
    }

    #[test]
    fn test_rule_override_disables_rule() {
        let linter = Linter::builder().rule("no-unused-vars", RuleSeverity::Off).build().unwrap();
        assert!(linter.rules().iter().all(|r| r.rule().name() != "no-unused-vars"));
        let report = linter.lint_text("var x = 1", "tempfile.js").unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_rule_override_changes_severity() {
        let linter = Linter::builder().rule("no-unused-vars", RuleSeverity::Warn).build().unwrap();
        let report = linter.lint_text("var x = 1", "tempfile.js").unwrap();
        assert_eq!(report.warning_count, 1);
        assert_eq!(report.error_count, 0);
    }

    #[test]
    fn test_unknown_names_fail_at_build() {
        assert!(matches!(
            Linter::builder().rule("no-such-rule", RuleSeverity::Error).build(),
            Err(LintError::UnknownRule(_))
        ));
        assert!(matches!(Linter::builder().env("mars").build(), Err(LintError::UnknownEnvironment(_))));
        assert!(matches!(
            Linter::builder().plugin_named("hms-plugins"),
            Err(LintError::UnknownPlugin(_))
        ));
        assert!(matches!(linter().formatter("checkstyle"), Err(LintError::UnknownFormatter(_))));
    }

    #[test]
    fn test_plugin_rules_registered() {
        let names: Vec<_> = linter().rules().iter().map(|r| r.rule().name()).collect();
        assert!(names.contains(&"security/no-eval"));
        assert!(names.contains(&"no-undef"));
    }

    #[test]
    fn test_lint_is_deterministic() {
        let linter = linter();
        let source = "var a = 1; if (a == 2) { debugger; }\nfoo();";
        let first = linter.lint_text(source, "tempfile.js").unwrap();
        let second = linter.lint_text(source, "tempfile.js").unwrap();
        assert_eq!(first, second);
    }
}
