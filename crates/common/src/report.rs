//! Lint report model shared by the engine, the service and the client.
//!
//! The serialized shape follows ESLint's JSON formatter so that existing
//! consumers of that format can read it unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a reported problem, serialized as `1` (warning) or `2` (error)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => 1,
            Severity::Error => 2,
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            1 => Ok(Self::Warning),
            2 => Ok(Self::Error),
            other => Err(format!("invalid severity `{other}`, expected 1 or 2")),
        }
    }
}

/// A replacement that resolves a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageFix {
    /// Byte range `[start, end)` of the text to replace
    pub range: [u32; 2],
    pub text: String,
}

/// A single problem found in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub rule_id: Option<String>,
    pub severity: Severity,
    pub message: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column, counted in characters
    pub column: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<MessageFix>,
}

impl LintMessage {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

/// All problems found in one file, with per-severity totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file_path: String,
    pub messages: Vec<LintMessage>,
    pub error_count: usize,
    pub warning_count: usize,
    pub fixable_error_count: usize,
    pub fixable_warning_count: usize,
}

impl FileReport {
    /// Build a report, sorting messages by position and computing the totals
    pub fn new(file_path: impl Into<String>, mut messages: Vec<LintMessage>) -> Self {
        messages.sort_by(|a, b| {
            (a.line, a.column, a.rule_id.as_deref()).cmp(&(b.line, b.column, b.rule_id.as_deref()))
        });

        let mut report = Self { file_path: file_path.into(), ..Self::default() };
        for message in &messages {
            match (message.severity, message.is_fixable()) {
                (Severity::Error, fixable) => {
                    report.error_count += 1;
                    report.fixable_error_count += usize::from(fixable);
                }
                (Severity::Warning, fixable) => {
                    report.warning_count += 1;
                    report.fixable_warning_count += usize::from(fixable);
                }
            }
        }
        report.messages = messages;
        report
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn problem_count(&self) -> usize {
        self.error_count + self.warning_count
    }
}
