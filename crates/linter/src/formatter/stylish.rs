//! ESLint's default `stylish` layout: one aligned table per file followed
//! by a problem summary

use std::fmt::Write;

use common::{FileReport, LintMessage};

use super::pluralize;

pub(super) fn format(reports: &[FileReport]) -> String {
    let mut output = String::from("\n");
    let (mut errors, mut warnings) = (0, 0);
    let (mut fixable_errors, mut fixable_warnings) = (0, 0);

    for report in reports.iter().filter(|report| !report.messages.is_empty()) {
        errors += report.error_count;
        warnings += report.warning_count;
        fixable_errors += report.fixable_error_count;
        fixable_warnings += report.fixable_warning_count;

        output.push_str(&report.file_path);
        output.push('\n');
        output.push_str(&table(&report.messages));
        output.push_str("\n\n");
    }

    let total = errors + warnings;
    if total == 0 {
        return String::new();
    }

    let _ = writeln!(
        output,
        "\u{2716} {total} {} ({errors} {}, {warnings} {})",
        pluralize("problem", total),
        pluralize("error", errors),
        pluralize("warning", warnings),
    );
    if fixable_errors > 0 || fixable_warnings > 0 {
        let _ = writeln!(
            output,
            "  {fixable_errors} {} and {fixable_warnings} {} potentially fixable with the `--fix` option.",
            pluralize("error", fixable_errors),
            pluralize("warning", fixable_warnings),
        );
    }
    output
}

struct Row<'a> {
    line: String,
    column: String,
    severity: &'static str,
    message: &'a str,
    rule: &'a str,
}

impl<'a> Row<'a> {
    fn new(message: &'a LintMessage) -> Self {
        Self {
            line: message.line.to_string(),
            column: message.column.to_string(),
            severity: if message.is_error() { "error" } else { "warning" },
            message: strip_final_period(&message.message),
            rule: message.rule_id.as_deref().unwrap_or_default(),
        }
    }
}

/// Columns are separated by two spaces; the line number is right aligned
/// and joined to the column with a colon
fn table(messages: &[LintMessage]) -> String {
    let rows: Vec<Row<'_>> = messages.iter().map(Row::new).collect();
    let line_width = widest(&rows, |row| row.line.len());
    let column_width = widest(&rows, |row| row.column.len());
    let severity_width = widest(&rows, |row| row.severity.len());
    let message_width = widest(&rows, |row| row.message.chars().count());

    rows.iter()
        .map(|row| {
            let text = format!(
                "  {:>line_width$}:{:<column_width$}  {:<severity_width$}  {:<message_width$}  {}",
                row.line, row.column, row.severity, row.message, row.rule
            );
            text.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn widest<'a>(rows: &[Row<'a>], cell: impl Fn(&Row<'a>) -> usize) -> usize {
    rows.iter().map(cell).max().unwrap_or(0)
}

/// `"Unused."` becomes `"Unused"`; a period after a space is kept
fn strip_final_period(message: &str) -> &str {
    match message.strip_suffix('.') {
        Some(rest) if !rest.is_empty() && !rest.ends_with(' ') => rest,
        _ => message,
    }
}

#[cfg(test)]
mod tests {
    use common::Severity;

    use super::super::tests::{message, sample_report};
    use super::*;

    #[test]
    fn test_stylish_layout() {
        let expected = "\nsrc/app.js\n   1:5  error    'x' is assigned a value but never used  no-unused-vars\n  12:9  warning  Expected '===' and instead saw '=='     eqeqeq\n\n\u{2716} 2 problems (1 error, 1 warning)\n  0 errors and 1 warning potentially fixable with the `--fix` option.\n";
        assert_eq!(format(&[sample_report()]), expected);
    }

    #[test]
    fn test_single_problem_summary() {
        let report = FileReport::new(
            "tempfile.js",
            vec![message("no-debugger", Severity::Error, 2, 1, "Unexpected 'debugger' statement.")],
        );
        let output = format(&[report]);
        assert!(output.contains("  2:1  error  Unexpected 'debugger' statement  no-debugger\n"));
        assert!(output.ends_with("\u{2716} 1 problem (1 error, 0 warnings)\n"));
        assert!(!output.contains("potentially fixable"));
    }

    #[test]
    fn test_clean_files_are_skipped() {
        let clean = FileReport::new("clean.js", Vec::new());
        let output = format(&[clean, sample_report()]);
        assert!(!output.contains("clean.js"));
        assert!(output.starts_with("\nsrc/app.js\n"));
    }

    #[test]
    fn test_strip_final_period() {
        assert_eq!(strip_final_period("Empty block statement."), "Empty block statement");
        assert_eq!(strip_final_period("Ends with ."), "Ends with .");
        assert_eq!(strip_final_period("No period"), "No period");
    }
}
