//! security/no-eval
//!
//! Disallow `eval`, the `Function` constructor and string arguments to
//! `setTimeout` / `setInterval`. Locally declared names that shadow these
//! globals are ignored.

use oxc_ast::ast::{CallExpression, Expression, NewExpression};
use oxc_span::{GetSpan, Span};

use crate::diagnostic::Diagnostic;
use crate::utils::{first_argument, is_global_reference, static_member};
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoEval;

impl RuleMeta for NoEval {
    const NAME: &'static str = "security/no-eval";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl NoEval {
    pub fn new() -> Self {
        Self
    }

    fn is_global(callee: &Expression<'_>, names: &[&str], ctx: &LintContext<'_>) -> bool {
        if !is_global_reference(callee, names) {
            return false;
        }
        match static_member(callee) {
            Some((object, _)) => ctx.is_unresolved_identifier(object),
            None => ctx.is_unresolved_identifier(callee),
        }
    }

    fn check_function_constructor(
        callee: &Expression<'_>,
        ctx: &mut LintContext<'_>,
        span: Span,
    ) {
        if Self::is_global(callee, &["Function"], ctx) {
            ctx.report(Diagnostic::new(Self::NAME, span, "The Function constructor is eval."));
        }
    }
}

impl Rule for NoEval {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_call_expression<'a>(&self, call: &CallExpression<'a>, ctx: &mut LintContext<'a>) {
        let callee = call.callee.without_parentheses();

        if Self::is_global(callee, &["eval"], ctx) {
            ctx.report(Diagnostic::new(Self::NAME, callee.span(), "eval can be harmful."));
            return;
        }

        if Self::is_global(callee, &["setTimeout", "setInterval", "execScript"], ctx) {
            if let Some(arg) = first_argument(&call.arguments) {
                if is_string_like(arg) {
                    ctx.report(Diagnostic::new(
                        Self::NAME,
                        arg.span(),
                        "Implied eval. Consider passing a function instead of a string.",
                    ));
                }
            }
            return;
        }

        Self::check_function_constructor(callee, ctx, call.span);
    }

    fn check_new_expression<'a>(&self, new: &NewExpression<'a>, ctx: &mut LintContext<'a>) {
        Self::check_function_constructor(new.callee.without_parentheses(), ctx, new.span);
    }
}

/// A string literal, a template, or a concatenation involving one
fn is_string_like(expr: &Expression<'_>) -> bool {
    match expr.without_parentheses() {
        Expression::StringLiteral(_) | Expression::TemplateLiteral(_) => true,
        Expression::BinaryExpression(binary) => {
            is_string_like(&binary.left) || is_string_like(&binary.right)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::lint_rule;

    use super::*;

    fn messages(source: &str) -> Vec<String> {
        lint_rule(NoEval::new(), source).into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_direct_eval() {
        assert_eq!(messages("eval('1 + 1');"), vec!["eval can be harmful."]);
        assert_eq!(messages("window.eval(code);"), vec!["eval can be harmful."]);
    }

    #[test]
    fn test_function_constructor() {
        assert_eq!(messages("new Function('a', 'return a');"), vec!["The Function constructor is eval."]);
        assert_eq!(messages("Function('return 1')();"), vec!["The Function constructor is eval."]);
    }

    #[test]
    fn test_implied_eval() {
        let expected = vec!["Implied eval. Consider passing a function instead of a string."];
        assert_eq!(messages("setTimeout('tick()', 100);"), expected);
        assert_eq!(messages("setInterval(`poll(${id})`, 100);"), expected);
        assert_eq!(messages("window.setTimeout('go' + suffix, 0);"), expected);
    }

    #[test]
    fn test_function_arguments_allowed() {
        assert!(messages("setTimeout(() => tick(), 100);\nsetInterval(poll, 100);").is_empty());
    }

    #[test]
    fn test_shadowed_eval_allowed() {
        assert!(messages("function later(setTimeout) { setTimeout('x', 1); }").is_empty());
        assert!(messages("const window = { eval() {} };\nwindow.eval('x');").is_empty());
    }
}
