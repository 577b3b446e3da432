//! eqeqeq
//!
//! Require `===` and `!==`. Comparisons where the loose operator cannot
//! coerce, a `typeof` result or two literals of the same type, get an
//! automatic fix.

use oxc_ast::ast::{BinaryExpression, Expression};
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::{BinaryOperator, UnaryOperator};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct Eqeqeq;

impl RuleMeta for Eqeqeq {
    const NAME: &'static str = "eqeqeq";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl Eqeqeq {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for Eqeqeq {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_binary_expression<'a>(&self, expr: &BinaryExpression<'a>, ctx: &mut LintContext<'a>) {
        let (loose, strict) = match expr.operator {
            BinaryOperator::Equality => ("==", "==="),
            BinaryOperator::Inequality => ("!=", "!=="),
            _ => return,
        };

        let operator_span = operator_span(expr, loose, ctx).unwrap_or(expr.span);
        let mut diagnostic = Diagnostic::new(
            Self::NAME,
            operator_span,
            format!("Expected '{strict}' and instead saw '{loose}'."),
        );
        if is_typeof(&expr.left)
            || is_typeof(&expr.right)
            || same_type_literals(&expr.left, &expr.right)
        {
            diagnostic = diagnostic.with_fix(Fix::new(operator_span, strict));
        }
        ctx.report(diagnostic);
    }
}

/// Locate the operator token between the two operands
fn operator_span(expr: &BinaryExpression<'_>, operator: &str, ctx: &LintContext<'_>) -> Option<Span> {
    let gap_start = expr.left.span().end;
    let gap = ctx.span_text(Span::new(gap_start, expr.right.span().start));
    let offset = u32::try_from(gap.find(operator)?).ok()?;
    let start = gap_start + offset;
    Some(Span::new(start, start + operator.len() as u32))
}

fn is_typeof(expr: &Expression<'_>) -> bool {
    matches!(expr, Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::Typeof)
}

fn same_type_literals(left: &Expression<'_>, right: &Expression<'_>) -> bool {
    matches!(
        (left, right),
        (Expression::StringLiteral(_), Expression::StringLiteral(_))
            | (Expression::NumericLiteral(_), Expression::NumericLiteral(_))
            | (Expression::BooleanLiteral(_), Expression::BooleanLiteral(_))
            | (Expression::NullLiteral(_), Expression::NullLiteral(_))
            | (Expression::BigIntLiteral(_), Expression::BigIntLiteral(_))
    )
}

#[cfg(test)]
mod tests {
    use crate::test_utils::lint_rule;

    use super::*;

    #[test]
    fn test_loose_equality() {
        let diagnostics = lint_rule(Eqeqeq::new(), "if (a == b) {}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected '===' and instead saw '=='.");
        // points at the operator, not the whole comparison
        assert_eq!((diagnostics[0].span.start, diagnostics[0].span.end), (6, 8));
        assert!(diagnostics[0].fix.is_none());
    }

    #[test]
    fn test_loose_inequality() {
        let diagnostics = lint_rule(Eqeqeq::new(), "a != null;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expected '!==' and instead saw '!='.");
    }

    #[test]
    fn test_typeof_comparison_is_fixable() {
        let diagnostics = lint_rule(Eqeqeq::new(), "typeof a == 'string';");
        let fix = diagnostics[0].fix.as_ref().expect("typeof comparison should be fixable");
        assert_eq!(fix.replacement, "===");
        assert_eq!((fix.span.start, fix.span.end), (9, 11));
    }

    #[test]
    fn test_same_type_literals_are_fixable() {
        let diagnostics = lint_rule(Eqeqeq::new(), "'a' != 'b';");
        assert_eq!(diagnostics[0].fix.as_ref().map(|f| f.replacement.as_str()), Some("!=="));
    }

    #[test]
    fn test_operator_inside_string_operand() {
        let diagnostics = lint_rule(Eqeqeq::new(), "'==' == x;");
        assert_eq!((diagnostics[0].span.start, diagnostics[0].span.end), (5, 7));
    }

    #[test]
    fn test_strict_equality_allowed() {
        assert!(lint_rule(Eqeqeq::new(), "a === b; a !== b;").is_empty());
    }
}
