//! Console rendering of lint reports

use chrono::Local;
use common::{FileReport, LintMessage};
use owo_colors::OwoColorize;

/// Width messages are padded to so rule ids line up
const MESSAGE_WIDTH: usize = 90;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// One report row: `line:col`, severity, message and rule id
pub fn message_row(message: &LintMessage, color: bool) -> String {
    let position = format!("{:<8}", format!("{}:{}", message.line, message.column));
    let severity = format!("{:>5}", if message.is_error() { "Error" } else { "Warning" });
    let text = format!("{:<MESSAGE_WIDTH$}", message.message);
    let rule = message.rule_id.as_deref().unwrap_or_default();

    let (position, severity) = match (color, message.is_error()) {
        (false, _) => (position, severity),
        (true, true) => (position.bright_red().to_string(), severity.bright_red().to_string()),
        (true, false) => (position.yellow().to_string(), severity.bright_yellow().to_string()),
    };
    format!(" {position}\t{severity}\t{text}\t{rule}\t")
}

/// `N Errors, M Warnings [HH:MM:SS]`
pub fn summary_line(report: &FileReport, time: &str, color: bool) -> String {
    let errors = report.error_count.to_string();
    let warnings = report.warning_count.to_string();
    if color {
        format!(
            " {} Errors, {} Warnings [{}]",
            errors.bright_red(),
            warnings.bright_yellow(),
            time.bright_magenta()
        )
    } else {
        format!(" {errors} Errors, {warnings} Warnings [{time}]")
    }
}

pub fn print_banner(text: &str) {
    if use_colors() {
        println!("{}", text.bright_green());
    } else {
        println!("{text}");
    }
}

pub fn print_report(report: &FileReport) {
    let color = use_colors();
    if report.is_clean() {
        if color {
            println!("{}", "**** Clean ****".bright_green());
        } else {
            println!("**** Clean ****");
        }
        return;
    }

    println!();
    if color {
        println!("{}", report.file_path.bright_cyan());
    } else {
        println!("{}", report.file_path);
    }
    for message in &report.messages {
        println!("{}", message_row(message, color));
    }
    let time = Local::now().format("%H:%M:%S").to_string();
    println!("\n{}\n", summary_line(report, &time, color));
}

#[cfg(test)]
mod tests {
    use common::Severity;

    use super::*;

    fn message(severity: Severity) -> LintMessage {
        LintMessage {
            rule_id: Some("eqeqeq".to_string()),
            severity,
            message: "Expected '===' and instead saw '=='.".to_string(),
            line: 12,
            column: 9,
            end_line: None,
            end_column: None,
            fix: None,
        }
    }

    #[test]
    fn test_message_row_padding() {
        let row = message_row(&message(Severity::Warning), false);
        let cells: Vec<&str> = row.split('\t').collect();
        assert_eq!(cells[0], " 12:9    ");
        assert_eq!(cells[1], "Warning");
        assert_eq!(cells[2].len(), MESSAGE_WIDTH);
        assert_eq!(cells[3], "eqeqeq");

        let row = message_row(&message(Severity::Error), false);
        assert!(row.contains("\tError\t"));
    }

    #[test]
    fn test_colored_row_keeps_text() {
        let row = message_row(&message(Severity::Error), true);
        assert!(row.contains("\u{1b}["));
        assert!(row.contains("Expected '===' and instead saw '=='."));
    }

    #[test]
    fn test_summary_line() {
        let report = FileReport::new("a.js", vec![message(Severity::Error), message(Severity::Warning)]);
        assert_eq!(summary_line(&report, "09:30:00", false), " 1 Errors, 1 Warnings [09:30:00]");
    }
}
