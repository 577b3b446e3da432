//! no-empty
//!
//! Disallow empty block statements. A block that only holds a comment
//! is considered intentional.

use oxc_ast::ast::{BlockStatement, SwitchStatement};

use crate::diagnostic::Diagnostic;
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoEmpty;

impl RuleMeta for NoEmpty {
    const NAME: &'static str = "no-empty";
    const CATEGORY: RuleCategory = RuleCategory::Suspicious;
}

impl NoEmpty {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoEmpty {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_block_statement<'a>(&self, block: &BlockStatement<'a>, ctx: &mut LintContext<'a>) {
        if !block.body.is_empty() {
            return;
        }
        // Everything between the braces is whitespace or comments
        let text = ctx.span_text(block.span);
        let inner = text.strip_prefix('{').and_then(|t| t.strip_suffix('}')).unwrap_or(text);
        if !inner.trim().is_empty() {
            return;
        }
        ctx.report(Diagnostic::new(Self::NAME, block.span, "Empty block statement."));
    }

    fn check_switch_statement<'a>(&self, switch: &SwitchStatement<'a>, ctx: &mut LintContext<'a>) {
        if switch.cases.is_empty() {
            ctx.report(Diagnostic::new(Self::NAME, switch.span, "Empty switch statement."));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::lint_rule;

    use super::*;

    #[test]
    fn test_empty_block() {
        let diagnostics = lint_rule(NoEmpty::new(), "if (foo) {}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Empty block statement.");
    }

    #[test]
    fn test_empty_catch() {
        let diagnostics = lint_rule(NoEmpty::new(), "try { foo(); } catch (e) {}");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_comment_marks_block_intentional() {
        assert!(lint_rule(NoEmpty::new(), "if (foo) { /* nothing to do */ }").is_empty());
    }

    #[test]
    fn test_empty_function_body_allowed() {
        assert!(lint_rule(NoEmpty::new(), "function noop() {}").is_empty());
    }

    #[test]
    fn test_empty_switch() {
        let diagnostics = lint_rule(NoEmpty::new(), "switch (foo) {}");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Empty switch statement.");
    }
}
