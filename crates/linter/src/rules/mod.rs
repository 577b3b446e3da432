//! Core lint rules
//!
//! Rule ids and messages follow ESLint's core rules of the same name.

use oxc_ast::ast::{
    AssignmentExpression, BinaryExpression, BlockStatement, CallExpression, ClassBody,
    DebuggerStatement, NewExpression, Statement, StringLiteral, SwitchStatement, TemplateLiteral,
};

use common::RuleSeverity;

use crate::{LintContext, RuleCategory};

pub mod eqeqeq;
pub mod no_debugger;
pub mod no_empty;
pub mod no_extra_semi;
pub mod no_undef;
pub mod no_unused_vars;

pub use eqeqeq::Eqeqeq;
pub use no_debugger::NoDebugger;
pub use no_empty::NoEmpty;
pub use no_extra_semi::NoExtraSemi;
pub use no_undef::NoUndef;
pub use no_unused_vars::NoUnusedVars;

/// A lint rule.
///
/// Node hooks are called from a single AST pass; `run_once` is called once
/// per file for rules that need the whole program or its semantic model.
/// Every hook defaults to doing nothing.
pub trait Rule: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    fn default_severity(&self) -> RuleSeverity {
        self.category().default_severity()
    }

    fn run_once<'a>(&self, _ctx: &mut LintContext<'a>) {}

    /// A list of statements: program body, block, function body or switch case
    fn check_statements<'a>(&self, _statements: &[Statement<'a>], _ctx: &mut LintContext<'a>) {}

    fn check_block_statement<'a>(&self, _block: &BlockStatement<'a>, _ctx: &mut LintContext<'a>) {}

    fn check_switch_statement<'a>(
        &self,
        _switch: &SwitchStatement<'a>,
        _ctx: &mut LintContext<'a>,
    ) {
    }

    fn check_class_body<'a>(&self, _body: &ClassBody<'a>, _ctx: &mut LintContext<'a>) {}

    fn check_debugger_statement<'a>(&self, _stmt: &DebuggerStatement, _ctx: &mut LintContext<'a>) {}

    fn check_binary_expression<'a>(
        &self,
        _expr: &BinaryExpression<'a>,
        _ctx: &mut LintContext<'a>,
    ) {
    }

    fn check_call_expression<'a>(&self, _call: &CallExpression<'a>, _ctx: &mut LintContext<'a>) {}

    fn check_new_expression<'a>(&self, _new: &NewExpression<'a>, _ctx: &mut LintContext<'a>) {}

    fn check_assignment_expression<'a>(
        &self,
        _assign: &AssignmentExpression<'a>,
        _ctx: &mut LintContext<'a>,
    ) {
    }

    fn check_string_literal<'a>(&self, _lit: &StringLiteral<'a>, _ctx: &mut LintContext<'a>) {}

    fn check_template_literal<'a>(
        &self,
        _tpl: &TemplateLiteral<'a>,
        _ctx: &mut LintContext<'a>,
    ) {
    }
}

/// The built-in rules, always registered before any plugin rules
pub fn core_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(Eqeqeq::new()),
        Box::new(NoDebugger::new()),
        Box::new(NoEmpty::new()),
        Box::new(NoExtraSemi::new()),
        Box::new(NoUndef::new()),
        Box::new(NoUnusedVars::new()),
    ]
}
