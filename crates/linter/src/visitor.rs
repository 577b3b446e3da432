//! Unified visitor for running all lint rules in a single AST pass
//!
//! `LintRunner` traverses the AST once and hands every node a rule cares
//! about to each enabled rule, stamping the rule's configured severity on
//! whatever it reports.

use oxc_ast::ast::{
    AssignmentExpression, BinaryExpression, BlockStatement, CallExpression, ClassBody,
    DebuggerStatement, FunctionBody, NewExpression, Program, Statement, StringLiteral, SwitchCase, SwitchStatement,
    TemplateLiteral,
};
use oxc_ast_visit::{walk, Visit};

use crate::linter::ConfiguredRule;
use crate::{Diagnostic, LintContext, Rule};

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a, 'r> {
    ctx: LintContext<'a>,
    rules: &'r [ConfiguredRule],
}

impl<'a, 'r> LintRunner<'a, 'r> {
    pub fn new(ctx: LintContext<'a>, rules: &'r [ConfiguredRule]) -> Self {
        Self { ctx, rules }
    }

    /// Run all enabled rules on the context's program
    pub fn run(mut self) -> Vec<Diagnostic> {
        let program = self.ctx.program();

        self.each_rule(|rule, ctx| rule.run_once(ctx));
        self.visit_program(program);

        self.ctx.into_diagnostics()
    }

    fn each_rule(&mut self, mut check: impl FnMut(&dyn Rule, &mut LintContext<'a>)) {
        let rules = self.rules;
        for configured in rules {
            self.ctx.set_severity(configured.severity());
            check(configured.rule(), &mut self.ctx);
        }
    }

    fn check_statements(&mut self, statements: &[Statement<'a>]) {
        self.each_rule(|rule, ctx| rule.check_statements(statements, ctx));
    }
}

impl<'a> Visit<'a> for LintRunner<'a, '_> {
    fn visit_program(&mut self, program: &Program<'a>) {
        self.check_statements(&program.body);
        walk::walk_program(self, program);
    }

    fn visit_block_statement(&mut self, block: &BlockStatement<'a>) {
        self.each_rule(|rule, ctx| rule.check_block_statement(block, ctx));
        self.check_statements(&block.body);
        walk::walk_block_statement(self, block);
    }

    fn visit_function_body(&mut self, body: &FunctionBody<'a>) {
        self.check_statements(&body.statements);
        walk::walk_function_body(self, body);
    }

    fn visit_switch_statement(&mut self, switch: &SwitchStatement<'a>) {
        self.each_rule(|rule, ctx| rule.check_switch_statement(switch, ctx));
        walk::walk_switch_statement(self, switch);
    }

    fn visit_switch_case(&mut self, case: &SwitchCase<'a>) {
        self.check_statements(&case.consequent);
        walk::walk_switch_case(self, case);
    }

    fn visit_class_body(&mut self, body: &ClassBody<'a>) {
        self.each_rule(|rule, ctx| rule.check_class_body(body, ctx));
        walk::walk_class_body(self, body);
    }

    fn visit_debugger_statement(&mut self, stmt: &DebuggerStatement) {
        self.each_rule(|rule, ctx| rule.check_debugger_statement(stmt, ctx));
    }

    fn visit_binary_expression(&mut self, expr: &BinaryExpression<'a>) {
        self.each_rule(|rule, ctx| rule.check_binary_expression(expr, ctx));
        walk::walk_binary_expression(self, expr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        self.each_rule(|rule, ctx| rule.check_call_expression(call, ctx));
        walk::walk_call_expression(self, call);
    }

    fn visit_new_expression(&mut self, new: &NewExpression<'a>) {
        self.each_rule(|rule, ctx| rule.check_new_expression(new, ctx));
        walk::walk_new_expression(self, new);
    }

    fn visit_assignment_expression(&mut self, assign: &AssignmentExpression<'a>) {
        self.each_rule(|rule, ctx| rule.check_assignment_expression(assign, ctx));
        walk::walk_assignment_expression(self, assign);
    }

    fn visit_string_literal(&mut self, lit: &StringLiteral<'a>) {
        self.each_rule(|rule, ctx| rule.check_string_literal(lit, ctx));
    }

    fn visit_template_literal(&mut self, tpl: &TemplateLiteral<'a>) {
        self.each_rule(|rule, ctx| rule.check_template_literal(tpl, ctx));
        walk::walk_template_literal(self, tpl);
    }
}
