//! security/no-inner-html
//!
//! Disallow writing unsanitized markup through `innerHTML`, `outerHTML`,
//! `insertAdjacentHTML` and `document.write`.

use oxc_ast::ast::{AssignmentExpression, AssignmentTarget, CallExpression, Expression};
use oxc_span::GetSpan;

use common::RuleSeverity;

use crate::diagnostic::{Diagnostic, Fix};
use crate::utils::{identifier_name, looks_like_html, static_member, static_string_value};
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone)]
pub struct NoInnerHtml {
    /// If the value is guaranteed to be a static HTML string, allow it
    pub allow_static: bool,
}

impl Default for NoInnerHtml {
    fn default() -> Self {
        Self { allow_static: true }
    }
}

impl RuleMeta for NoInnerHtml {
    const NAME: &'static str = "security/no-inner-html";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl NoInnerHtml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_static(mut self, allow_static: bool) -> Self {
        self.allow_static = allow_static;
        self
    }

    fn dangerous(sink: &str) -> String {
        format!("The {sink} sink is dangerous; passing unsanitized input can lead to security vulnerabilities.")
    }

    /// Static markup is allowed when `allow_static` is set
    fn is_allowed(&self, value: &Expression<'_>) -> bool {
        self.allow_static && static_string_value(value).is_some_and(|s| looks_like_html(&s))
    }
}

impl Rule for NoInnerHtml {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn default_severity(&self) -> RuleSeverity {
        RuleSeverity::Warn
    }

    fn check_assignment_expression<'a>(
        &self,
        assign: &AssignmentExpression<'a>,
        ctx: &mut LintContext<'a>,
    ) {
        let AssignmentTarget::StaticMemberExpression(member) = &assign.left else {
            return;
        };
        let property = member.property.name.as_str();
        if !matches!(property, "innerHTML" | "outerHTML") {
            return;
        }
        if self.allow_static {
            if let Some(text) = static_string_value(&assign.right) {
                if looks_like_html(&text) || property == "outerHTML" {
                    return;
                }
                // Plain text written through innerHTML only needs textContent
                ctx.report(
                    Diagnostic::new(
                        Self::NAME,
                        assign.span,
                        "The string assigned to innerHTML does not appear to be HTML; use textContent instead.",
                    )
                    .with_fix(Fix::new(member.property.span, "textContent")),
                );
                return;
            }
        }

        ctx.report(Diagnostic::new(Self::NAME, assign.span, Self::dangerous(property)));
    }

    fn check_call_expression<'a>(&self, call: &CallExpression<'a>, ctx: &mut LintContext<'a>) {
        let Some((object, method)) = static_member(&call.callee) else {
            return;
        };
        let (sink, markup) = match method {
            "insertAdjacentHTML" => ("insertAdjacentHTML", call.arguments.get(1)),
            "write" | "writeln" if identifier_name(object) == Some("document") => {
                ("document.write", call.arguments.first())
            }
            _ => return,
        };
        let Some(markup) = markup.and_then(|arg| arg.as_expression()) else {
            return;
        };
        if self.is_allowed(markup) {
            return;
        }
        ctx.report(Diagnostic::new(Self::NAME, markup.span(), Self::dangerous(sink)));
    }
}
