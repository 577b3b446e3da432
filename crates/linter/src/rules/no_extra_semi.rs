//! no-extra-semi
//!
//! Disallow unnecessary semicolons. Empty statements used as loop or `if`
//! bodies are not part of a statement list and are left alone. Class bodies
//! keep no empty elements, so their semicolons are found in the source
//! between members.

use oxc_ast::ast::{ClassBody, ClassElement, Statement};
use oxc_span::{GetSpan, Span};

use crate::diagnostic::{Diagnostic, Fix};
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoExtraSemi;

impl RuleMeta for NoExtraSemi {
    const NAME: &'static str = "no-extra-semi";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoExtraSemi {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoExtraSemi {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_statements<'a>(&self, statements: &[Statement<'a>], ctx: &mut LintContext<'a>) {
        for stmt in statements {
            if let Statement::EmptyStatement(empty) = stmt {
                ctx.report(
                    Diagnostic::new(Self::NAME, empty.span, "Unnecessary semicolon.")
                        .with_fix(Fix::delete(empty.span)),
                );
            }
        }
    }

    fn check_class_body<'a>(&self, body: &ClassBody<'a>, ctx: &mut LintContext<'a>) {
        let mut gap_start = body.span.start + 1;
        let mut needs_terminator = false;
        for element in &body.body {
            let span = element.span();
            report_gap(ctx, Span::new(gap_start, span.start), needs_terminator);
            gap_start = span.end;
            needs_terminator = is_unterminated_field(element, ctx);
        }
        let end = body.span.end.saturating_sub(1).max(gap_start);
        report_gap(ctx, Span::new(gap_start, end), needs_terminator);
    }
}

/// A field whose own span stops before its `;`
fn is_unterminated_field(element: &ClassElement<'_>, ctx: &LintContext<'_>) -> bool {
    matches!(
        element,
        ClassElement::PropertyDefinition(_)
            | ClassElement::AccessorProperty(_)
            | ClassElement::TSIndexSignature(_)
    ) && !ctx.span_text(element.span()).ends_with(';')
}

/// Report the semicolons between two class members. The first one closes the
/// previous field when `terminator` is set.
fn report_gap(ctx: &mut LintContext<'_>, gap: Span, terminator: bool) {
    let offsets = semicolons(ctx.span_text(gap));
    for offset in offsets.into_iter().skip(usize::from(terminator)) {
        let start = gap.start + offset;
        let span = Span::new(start, start + 1);
        ctx.report(
            Diagnostic::new(NoExtraSemi::NAME, span, "Unnecessary semicolon.").with_fix(Fix::delete(span)),
        );
    }
}

/// Byte offsets of `;` in text made only of whitespace, comments and semicolons
fn semicolons(gap: &str) -> Vec<u32> {
    let mut found = Vec::new();
    let mut rest = gap;
    loop {
        let trimmed = rest.trim_start();
        let offset = (gap.len() - trimmed.len()) as u32;
        if let Some(after) = trimmed.strip_prefix(';') {
            found.push(offset);
            rest = after;
        } else if let Some(comment) = trimmed.strip_prefix("//") {
            rest = comment.find('\n').map_or("", |end| &comment[end..]);
        } else if let Some(comment) = trimmed.strip_prefix("/*") {
            rest = comment.find("*/").map_or("", |end| &comment[end + 2..]);
        } else {
            return found;
        }
    }
}
