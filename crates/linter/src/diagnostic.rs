//! What rules report

use oxc_span::Span;

use common::{MessageFix, Severity};

/// Replace the text under `span` with `replacement`
#[derive(Debug, Clone)]
pub struct Fix {
    pub span: Span,
    pub replacement: String,
}

impl Fix {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self { span, replacement: replacement.into() }
    }

    pub fn delete(span: Span) -> Self {
        Self::new(span, "")
    }

    pub(crate) fn into_message_fix(self) -> MessageFix {
        MessageFix { range: [self.span.start, self.span.end], text: self.replacement }
    }
}

/// A problem found by a rule, located by byte span
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub rule: &'static str,
    pub span: Span,
    pub message: String,
    /// Stamped from the rule configuration by [`crate::LintContext::report`]
    pub severity: Severity,
    pub fix: Option<Fix>,
}

impl Diagnostic {
    pub fn new(rule: &'static str, span: Span, message: impl Into<String>) -> Self {
        Self { rule, span, message: message.into(), severity: Severity::Error, fix: None }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}
