//! Per-file state shared by every rule

use oxc_ast::ast::{Expression, Program};
use oxc_semantic::{Scoping, Semantic};
use oxc_span::Span;

use common::Severity;

use crate::{Diagnostic, Environments};

/// Borrowed view of one analyzed file plus the diagnostics reported so far
pub struct LintContext<'a> {
    source_text: &'a str,
    program: &'a Program<'a>,
    semantic: &'a Semantic<'a>,
    environments: &'a Environments,
    /// Severity configured for the rule that is currently running
    severity: Severity,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(
        source_text: &'a str,
        program: &'a Program<'a>,
        semantic: &'a Semantic<'a>,
        environments: &'a Environments,
    ) -> Self {
        Self {
            source_text,
            program,
            semantic,
            environments,
            severity: Severity::Error,
            diagnostics: Vec::new(),
        }
    }

    pub fn program(&self) -> &'a Program<'a> {
        self.program
    }

    pub fn scoping(&self) -> &'a Scoping {
        self.semantic.scoping()
    }

    /// Whether `name` is a global provided by the enabled environments
    pub fn is_global(&self, name: &str) -> bool {
        self.environments.contains(name)
    }

    /// Whether `expr` is a plain identifier that resolves to no binding in the file
    pub fn is_unresolved_identifier(&self, expr: &Expression<'_>) -> bool {
        match expr {
            Expression::Identifier(ident) => {
                self.scoping().get_reference(ident.reference_id()).symbol_id().is_none()
            }
            _ => false,
        }
    }

    /// Source text under `span`; empty if the span is out of range
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source_text.get(span.start as usize..span.end as usize).unwrap_or_default()
    }

    pub(crate) fn set_severity(&mut self, severity: Severity) {
        self.severity = severity;
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic.with_severity(self.severity));
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
