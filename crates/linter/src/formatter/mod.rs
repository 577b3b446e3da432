//! Report formatters
//!
//! Each formatter turns a set of [`FileReport`]s into the text ESLint's
//! formatter of the same name would print, without terminal colors.

mod compact;
mod stylish;
mod unix;

use common::{FileReport, LintMessage};

/// A named report formatter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Stylish,
    Json,
    Compact,
    Unix,
}

impl Formatter {
    pub const ALL: [Formatter; 4] = [Self::Stylish, Self::Json, Self::Compact, Self::Unix];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|formatter| formatter.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Stylish => "stylish",
            Self::Json => "json",
            Self::Compact => "compact",
            Self::Unix => "unix",
        }
    }

    pub fn format(self, reports: &[FileReport]) -> String {
        match self {
            Self::Stylish => stylish::format(reports),
            Self::Json => serde_json::to_string(reports).unwrap_or_default(),
            Self::Compact => compact::format(reports),
            Self::Unix => unix::format(reports),
        }
    }
}

impl std::fmt::Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn message_type(message: &LintMessage) -> &'static str {
    if message.is_error() {
        "Error"
    } else {
        "Warning"
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Trailer shared by the line-oriented formatters
fn problem_total(reports: &[FileReport]) -> String {
    let total: usize = reports.iter().map(|report| report.messages.len()).sum();
    if total == 0 {
        String::new()
    } else {
        format!("\n{total} {}", pluralize("problem", total))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use common::{MessageFix, Severity};

    use super::*;

    pub(crate) fn message(rule: &str, severity: Severity, line: u32, column: u32, text: &str) -> LintMessage {
        LintMessage {
            rule_id: Some(rule.to_string()),
            severity,
            message: text.to_string(),
            line,
            column,
            end_line: None,
            end_column: None,
            fix: None,
        }
    }

    pub(crate) fn sample_report() -> FileReport {
        let mut eqeqeq = message("eqeqeq", Severity::Warning, 12, 9, "Expected '===' and instead saw '=='.");
        eqeqeq.fix = Some(MessageFix { range: [180, 182], text: "===".to_string() });
        FileReport::new(
            "src/app.js",
            vec![
                message("no-unused-vars", Severity::Error, 1, 5, "'x' is assigned a value but never used."),
                eqeqeq,
            ],
        )
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Formatter::from_name("stylish"), Some(Formatter::Stylish));
        assert_eq!(Formatter::from_name("unix"), Some(Formatter::Unix));
        assert_eq!(Formatter::from_name("checkstyle"), None);
        assert_eq!(Formatter::from_name("Stylish"), None);
    }

    #[test]
    fn test_json_is_camel_case_array() {
        let output = Formatter::Json.format(&[sample_report()]);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let report = &value[0];
        assert_eq!(report["filePath"], "src/app.js");
        assert_eq!(report["errorCount"], 1);
        assert_eq!(report["fixableWarningCount"], 1);
        assert_eq!(report["messages"][0]["ruleId"], "no-unused-vars");
        assert_eq!(report["messages"][0]["severity"], 2);
    }

    #[test]
    fn test_clean_reports() {
        let clean = [FileReport::new("tempfile.js", Vec::new())];
        assert_eq!(Formatter::Stylish.format(&clean), "");
        assert_eq!(Formatter::Compact.format(&clean), "");
        assert_eq!(Formatter::Unix.format(&clean), "");
        assert!(Formatter::Json.format(&clean).contains("\"messages\":[]"));
    }
}
