//! Helpers for running a single rule against a snippet in unit tests

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

use common::Severity;

use crate::linter::ConfiguredRule;
use crate::{Diagnostic, Environments, LintContext, LintRunner, Rule};

/// Run `rule` alone over `source` with the `browser` environment enabled
pub fn lint_rule(rule: impl Rule + 'static, source: &str) -> Vec<Diagnostic> {
    lint_rule_with_envs(rule, source, &["browser"])
}

pub fn lint_rule_with_envs(
    rule: impl Rule + 'static,
    source: &str,
    envs: &[&str],
) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();
    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);

    let semantic_ret = SemanticBuilder::new().build(&ret.program);
    let environments = Environments::new(envs).unwrap();
    let ctx = LintContext::new(
        source,
        &ret.program,
        &semantic_ret.semantic,
        &environments,
    );
    let rules = [ConfiguredRule::new(Box::new(rule), Severity::Error)];
    LintRunner::new(ctx, &rules).run()
}
