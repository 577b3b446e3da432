//! no-undef
//!
//! Disallow references to variables that are neither declared in the file
//! nor provided by an enabled environment. `typeof x` is allowed so
//! feature detection keeps working.

use oxc_ast::ast::{Expression, IdentifierReference, UnaryExpression};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::Scoping;
use oxc_span::Span;
use oxc_syntax::operator::UnaryOperator;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoUndef;

impl RuleMeta for NoUndef {
    const NAME: &'static str = "no-undef";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoUndef {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoUndef {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run_once<'a>(&self, ctx: &mut LintContext<'a>) {
        let mut collector = UnresolvedReferences { scoping: ctx.scoping(), found: Vec::new() };
        collector.visit_program(ctx.program());

        for (name, span) in collector.found {
            if name == "arguments" || ctx.is_global(name) {
                continue;
            }
            ctx.report(Diagnostic::new(Self::NAME, span, format!("'{name}' is not defined.")));
        }
    }
}

/// Collects identifier references that do not resolve to any binding
struct UnresolvedReferences<'a> {
    scoping: &'a Scoping,
    found: Vec<(&'a str, Span)>,
}

impl<'a> Visit<'a> for UnresolvedReferences<'a> {
    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        let reference = self.scoping.get_reference(ident.reference_id());
        if reference.symbol_id().is_none() {
            self.found.push((ident.name.as_str(), ident.span));
        }
    }

    fn visit_unary_expression(&mut self, expr: &UnaryExpression<'a>) {
        if expr.operator == UnaryOperator::Typeof
            && matches!(expr.argument.without_parentheses(), Expression::Identifier(_))
        {
            return;
        }
        walk::walk_unary_expression(self, expr);
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{lint_rule, lint_rule_with_envs};

    use super::*;

    #[test]
    fn test_undeclared_call() {
        let diagnostics = lint_rule(NoUndef::new(), "foo();");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "'foo' is not defined.");
        assert_eq!((diagnostics[0].span.start, diagnostics[0].span.end), (0, 3));
    }

    #[test]
    fn test_undeclared_assignment() {
        let diagnostics = lint_rule(NoUndef::new(), "leaked = 1;");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_declared_and_hoisted_names() {
        let source = "var a = 1;\nfunction b() { return a + c(); }\nfunction c() { return arguments.length; }\nb();";
        assert!(lint_rule(NoUndef::new(), source).is_empty());
    }

    #[test]
    fn test_typeof_is_allowed() {
        assert!(lint_rule(NoUndef::new(), "if (typeof require === 'function') {}").is_empty());
    }

    #[test]
    fn test_parenthesized_typeof_is_allowed() {
        assert!(lint_rule(NoUndef::new(), "if (typeof (module) === 'object') {}").is_empty());
        assert_eq!(lint_rule(NoUndef::new(), "typeof (module.exports);").len(), 1);
    }

    #[test]
    fn test_builtins_always_defined() {
        assert!(lint_rule_with_envs(NoUndef::new(), "Math.max(parseInt('1'), NaN);", &[]).is_empty());
    }

    #[test]
    fn test_browser_globals_follow_environment() {
        let source = "document.title = window.name;";
        assert!(lint_rule(NoUndef::new(), source).is_empty());
        let diagnostics = lint_rule_with_envs(NoUndef::new(), source, &[]);
        assert_eq!(diagnostics.len(), 2);
    }
}
