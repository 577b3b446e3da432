//! security/no-script-url
//!
//! Disallow `javascript:` URLs.

use oxc_ast::ast::{StringLiteral, TemplateLiteral};
use oxc_span::Span;

use crate::diagnostic::Diagnostic;
use crate::utils::{is_script_url, template_static_value};
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoScriptUrl;

impl RuleMeta for NoScriptUrl {
    const NAME: &'static str = "security/no-script-url";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoScriptUrl {
    pub fn new() -> Self {
        Self
    }

    fn check_value(value: &str, span: Span, ctx: &mut LintContext<'_>) {
        if is_script_url(value) {
            ctx.report(Diagnostic::new(Self::NAME, span, "Script URL is a form of eval."));
        }
    }
}

impl Rule for NoScriptUrl {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_string_literal<'a>(&self, lit: &StringLiteral<'a>, ctx: &mut LintContext<'a>) {
        Self::check_value(lit.value.as_str(), lit.span, ctx);
    }

    fn check_template_literal<'a>(&self, tpl: &TemplateLiteral<'a>, ctx: &mut LintContext<'a>) {
        if let Some(value) = template_static_value(tpl) {
            Self::check_value(&value, tpl.span, ctx);
        }
    }
}
