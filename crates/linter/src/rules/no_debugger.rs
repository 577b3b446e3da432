//! no-debugger
//!
//! Disallow the use of `debugger`.

use oxc_ast::ast::DebuggerStatement;

use crate::diagnostic::Diagnostic;
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoDebugger;

impl RuleMeta for NoDebugger {
    const NAME: &'static str = "no-debugger";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoDebugger {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoDebugger {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn check_debugger_statement<'a>(&self, stmt: &DebuggerStatement, ctx: &mut LintContext<'a>) {
        ctx.report(Diagnostic::new(Self::NAME, stmt.span, "Unexpected 'debugger' statement."));
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::lint_rule;

    use super::*;

    #[test]
    fn test_debugger_statement() {
        let diagnostics = lint_rule(NoDebugger::new(), "function f() { debugger; }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unexpected 'debugger' statement.");
    }

    #[test]
    fn test_no_debugger() {
        assert!(lint_rule(NoDebugger::new(), "var debug = true;").is_empty());
    }
}
