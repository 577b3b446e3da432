//! no-unused-vars
//!
//! Disallow variables, functions, classes, imports and parameters that are
//! declared but never read. Parameters are only checked after the last
//! used one, caught errors are not checked, and exported bindings count as
//! used.

use oxc_ast::ast::{
    ArrowFunctionExpression, AssignmentTarget, BindingIdentifier, Class, Declaration, ExportDefaultDeclarationKind, Expression,
    ExpressionStatement, FormalParameter, FormalParameters, Function, IdentifierReference,
    ImportDeclaration, ImportDeclarationSpecifier, Program, SimpleAssignmentTarget, Statement,
    TSTypeAnnotation, VariableDeclarator,
};
use oxc_ast_visit::{walk, Visit};
use oxc_semantic::Scoping;
use oxc_span::{GetSpan, Span};
use oxc_syntax::operator::AssignmentOperator;
use oxc_syntax::scope::ScopeFlags;
use oxc_syntax::symbol::SymbolId;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::diagnostic::Diagnostic;
use crate::{LintContext, Rule, RuleCategory, RuleMeta};

#[derive(Debug, Clone, Default)]
pub struct NoUnusedVars;

impl RuleMeta for NoUnusedVars {
    const NAME: &'static str = "no-unused-vars";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoUnusedVars {
    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoUnusedVars {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run_once<'a>(&self, ctx: &mut LintContext<'a>) {
        let program = ctx.program();
        let mut usage = Usage::new(ctx.scoping(), exported_symbols(program));
        usage.visit_program(program);

        let mut unused: Vec<&Binding<'_>> =
            usage.bindings.iter().filter(|binding| !usage.is_used(binding)).collect();
        for params in &usage.params {
            // after-used: leading parameters are positional placeholders
            let last_used = params.iter().rposition(|group| group.iter().any(|b| usage.is_used(b)));
            let checked = last_used.map_or(0, |index| index + 1);
            unused.extend(params[checked..].iter().flatten().filter(|b| !usage.is_used(b)));
        }

        for binding in unused {
            let message = if binding.is_assigned(&usage.written) {
                format!("'{}' is assigned a value but never used.", binding.name)
            } else {
                format!("'{}' is defined but never used.", binding.name)
            };
            ctx.report(Diagnostic::new(Self::NAME, binding.span, message));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindingKind {
    Variable { initialized: bool },
    Function,
    Class,
    Import,
    Param,
}

#[derive(Debug)]
struct Binding<'a> {
    symbol: SymbolId,
    name: &'a str,
    span: Span,
    kind: BindingKind,
    /// Span of the declaration itself; reads inside it are self references
    owner: Option<Span>,
}

impl Binding<'_> {
    fn is_assigned(&self, written: &FxHashSet<SymbolId>) -> bool {
        match self.kind {
            BindingKind::Variable { initialized } => initialized || written.contains(&self.symbol),
            _ => false,
        }
    }
}

/// Walks the program recording declared bindings and where each symbol is read
struct Usage<'a> {
    scoping: &'a Scoping,
    exported: FxHashSet<SymbolId>,
    seen: FxHashSet<SymbolId>,
    bindings: Vec<Binding<'a>>,
    /// One entry per parameter list, one group per parameter
    params: Vec<Vec<Vec<Binding<'a>>>>,
    reads: FxHashMap<SymbolId, Vec<Span>>,
    written: FxHashSet<SymbolId>,
    /// Reads of a symbol inside a statement that only updates it
    self_update: Option<SelfUpdate>,
}

impl<'a> Usage<'a> {
    fn new(scoping: &'a Scoping, exported: FxHashSet<SymbolId>) -> Self {
        Self {
            scoping,
            exported,
            seen: FxHashSet::default(),
            bindings: Vec::new(),
            params: Vec::new(),
            reads: FxHashMap::default(),
            written: FxHashSet::default(),
            self_update: None,
        }
    }

    fn is_used(&self, binding: &Binding<'_>) -> bool {
        self.reads.get(&binding.symbol).is_some_and(|spans| {
            spans.iter().any(|span| !binding.owner.is_some_and(|owner| contains(owner, *span)))
        })
    }

    fn binding(
        &mut self,
        ident: &BindingIdentifier<'a>,
        kind: BindingKind,
        owner: Option<Span>,
    ) -> Option<Binding<'a>> {
        let symbol = ident.symbol_id();
        if self.exported.contains(&symbol) || !self.seen.insert(symbol) {
            return None;
        }
        Some(Binding { symbol, name: ident.name.as_str(), span: ident.span, kind, owner })
    }

    fn declare(&mut self, ident: &BindingIdentifier<'a>, kind: BindingKind, owner: Option<Span>) {
        if let Some(binding) = self.binding(ident, kind, owner) {
            self.bindings.push(binding);
        }
    }

    /// `x++`, `x op= y` or `x = f(x)` as a whole statement only writes `x`
    fn self_update_of(&self, expr: &Expression<'a>) -> Option<SelfUpdate> {
        let (target, reads) = match expr {
            Expression::UpdateExpression(update) => match &update.argument {
                SimpleAssignmentTarget::AssignmentTargetIdentifier(ident) => (ident, ident.span),
                _ => return None,
            },
            Expression::AssignmentExpression(assign) => {
                let AssignmentTarget::AssignmentTargetIdentifier(ident) = &assign.left else {
                    return None;
                };
                if assign.operator == AssignmentOperator::Assign {
                    (ident, assign.right.span())
                } else {
                    (ident, ident.span)
                }
            }
            _ => return None,
        };
        let symbol = self.scoping.get_reference(target.reference_id()).symbol_id()?;
        Some(SelfUpdate { symbol, reads })
    }

    fn is_self_read(&self, symbol: SymbolId, span: Span) -> bool {
        self.self_update
            .as_ref()
            .is_some_and(|update| update.symbol == symbol && contains(update.reads, span))
    }

    fn declare_all(&mut self, idents: Vec<(&'a str, Span, SymbolId)>, kind: BindingKind) -> Vec<Binding<'a>> {
        idents
            .into_iter()
            .filter(|(_, _, symbol)| !self.exported.contains(symbol) && self.seen.insert(*symbol))
            .map(|(name, span, symbol)| Binding { symbol, name, span, kind, owner: None })
            .collect()
    }
}

impl<'a> Visit<'a> for Usage<'a> {
    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator<'a>) {
        let kind = BindingKind::Variable { initialized: decl.init.is_some() };
        let mut names = BindingNames::default();
        names.visit_variable_declarator(decl);
        let declared = self.declare_all(names.found, kind);
        self.bindings.extend(declared);
        walk::walk_variable_declarator(self, decl);
    }

    fn visit_function(&mut self, func: &Function<'a>, flags: ScopeFlags) {
        if func.is_declaration() {
            if let Some(id) = &func.id {
                self.declare(id, BindingKind::Function, Some(func.span));
            }
        }
        // A function may be stored and called later, so reads inside it count
        let outer = self.self_update.take();
        walk::walk_function(self, func, flags);
        self.self_update = outer;
    }

    fn visit_arrow_function_expression(&mut self, arrow: &ArrowFunctionExpression<'a>) {
        let outer = self.self_update.take();
        walk::walk_arrow_function_expression(self, arrow);
        self.self_update = outer;
    }

    fn visit_class(&mut self, class: &Class<'a>) {
        if class.is_declaration() {
            if let Some(id) = &class.id {
                self.declare(id, BindingKind::Class, Some(class.span));
            }
        }
        walk::walk_class(self, class);
    }

    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        for specifier in decl.specifiers.iter().flatten() {
            let local = match specifier {
                ImportDeclarationSpecifier::ImportSpecifier(s) => &s.local,
                ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => &s.local,
                ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => &s.local,
            };
            self.declare(local, BindingKind::Import, None);
        }
    }

    fn visit_formal_parameters(&mut self, params: &FormalParameters<'a>) {
        let mut groups = Vec::with_capacity(params.items.len() + 1);
        for param in &params.items {
            let mut names = BindingNames::default();
            walk::walk_formal_parameter(&mut names, param);
            groups.push(self.declare_all(names.found, BindingKind::Param));
        }
        // Positional parameters are skipped here, leaving the rest element
        let mut names = BindingNames::default();
        names.visit_formal_parameters(params);
        groups.push(self.declare_all(names.found, BindingKind::Param));
        self.params.push(groups);

        walk::walk_formal_parameters(self, params);
    }

    fn visit_expression_statement(&mut self, stmt: &ExpressionStatement<'a>) {
        let previous = self.self_update.take();
        self.self_update = self.self_update_of(&stmt.expression);
        walk::walk_expression_statement(self, stmt);
        self.self_update = previous;
    }

    fn visit_identifier_reference(&mut self, ident: &IdentifierReference<'a>) {
        let reference = self.scoping.get_reference(ident.reference_id());
        let Some(symbol) = reference.symbol_id() else {
            return;
        };
        if reference.is_write() {
            self.written.insert(symbol);
        }
        if reference.is_read() && !self.is_self_read(symbol, ident.span) {
            self.reads.entry(symbol).or_default().push(ident.span);
        }
    }
}

/// Binding names introduced by a declarator or parameter, skipping
/// default values, computed keys and type annotations
#[derive(Default)]
struct BindingNames<'a> {
    found: Vec<(&'a str, Span, SymbolId)>,
}

impl<'a> Visit<'a> for BindingNames<'a> {
    fn visit_binding_identifier(&mut self, ident: &BindingIdentifier<'a>) {
        self.found.push((ident.name.as_str(), ident.span, ident.symbol_id()));
    }

    fn visit_expression(&mut self, _expr: &Expression<'a>) {}

    fn visit_ts_type_annotation(&mut self, _annotation: &TSTypeAnnotation<'a>) {}

    fn visit_formal_parameter(&mut self, _param: &FormalParameter<'a>) {}
}

/// Symbols declared by top-level `export` declarations
fn exported_symbols(program: &Program<'_>) -> FxHashSet<SymbolId> {
    let mut names = BindingNames::default();
    for stmt in &program.body {
        match stmt {
            Statement::ExportNamedDeclaration(export) => match &export.declaration {
                Some(Declaration::VariableDeclaration(var)) => {
                    for decl in &var.declarations {
                        names.visit_variable_declarator(decl);
                    }
                }
                Some(Declaration::FunctionDeclaration(func)) => {
                    names.found.extend(func.id.as_ref().map(binding_entry));
                }
                Some(Declaration::ClassDeclaration(class)) => {
                    names.found.extend(class.id.as_ref().map(binding_entry));
                }
                _ => {}
            },
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    names.found.extend(func.id.as_ref().map(binding_entry));
                }
                ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                    names.found.extend(class.id.as_ref().map(binding_entry));
                }
                _ => {}
            },
            _ => {}
        }
    }
    names.found.into_iter().map(|(_, _, symbol)| symbol).collect()
}

fn binding_entry<'a>(ident: &BindingIdentifier<'a>) -> (&'a str, Span, SymbolId) {
    (ident.name.as_str(), ident.span, ident.symbol_id())
}

/// Symbol updated by a statement and the span where its reads are not uses
struct SelfUpdate {
    symbol: SymbolId,
    reads: Span,
}

fn contains(outer: Span, inner: Span) -> bool {
    outer.start <= inner.start && inner.end <= outer.end
}

#[cfg(test)]
mod tests {
    use crate::test_utils::lint_rule;

    use super::*;

    fn messages(source: &str) -> Vec<String> {
        lint_rule(NoUnusedVars::new(), source).into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_unused_initialized_variable() {
        assert_eq!(messages("var x = 1"), vec!["'x' is assigned a value but never used."]);
    }

    #[test]
    fn test_unused_declaration_without_value() {
        assert_eq!(messages("let y;"), vec!["'y' is defined but never used."]);
    }

    #[test]
    fn test_used_variable() {
        assert!(messages("const x = 1;\nconsole.log(x);").is_empty());
    }

    #[test]
    fn test_unused_function_and_recursion() {
        assert_eq!(
            messages("function loop(n) { return n && loop(n - 1); }"),
            vec!["'loop' is defined but never used."]
        );
    }

    #[test]
    fn test_exported_bindings_are_used() {
        assert!(messages("export const a = 1;\nexport function b() {}\nexport default class C {}").is_empty());
    }

    #[test]
    fn test_unused_import() {
        assert_eq!(
            messages("import { readFile } from 'fs';"),
            vec!["'readFile' is defined but never used."]
        );
    }

    #[test]
    fn test_params_after_last_used() {
        let source = "function handler(req, res, next) { return res; }\nhandler();";
        assert_eq!(messages(source), vec!["'next' is defined but never used."]);
    }

    #[test]
    fn test_destructured_bindings() {
        let source = "const { a, b } = obj;\nconsole.log(a);";
        assert_eq!(messages(source), vec!["'b' is assigned a value but never used."]);
    }

    #[test]
    fn test_increment_is_not_a_read() {
        assert_eq!(
            messages("let count = 0;\ncount++;"),
            vec!["'count' is assigned a value but never used."]
        );
        assert!(messages("let count = 0;\nconsole.log(count++);").is_empty());
    }

    #[test]
    fn test_reassignment_from_itself_is_not_a_read() {
        assert_eq!(
            messages("var x = 1;\nx = x + 1;"),
            vec!["'x' is assigned a value but never used."]
        );
        assert!(messages("var x = 1;\nx = x + 1;\nconsole.log(x);").is_empty());
        assert!(messages("var y = 1;\nvar x = 1;\nx = y;\nconsole.log(x);").is_empty());
    }

    #[test]
    fn test_self_update_inside_stored_function_is_a_read() {
        assert!(messages("var n = 0;\nn = () => n;").is_empty());
    }

    #[test]
    fn test_caught_error_not_checked() {
        assert!(messages("try { run(); } catch (err) {}").is_empty());
    }

    #[test]
    fn test_redeclared_var_reported_once() {
        assert_eq!(messages("var x = 1;\nvar x = 2;").len(), 1);
    }
}
