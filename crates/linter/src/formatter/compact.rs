use std::fmt::Write;

use common::FileReport;

use super::{message_type, problem_total};

/// `path: line L, col C, Error - message (rule)`, one line per message
pub(super) fn format(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports {
        for message in &report.messages {
            let _ = write!(
                output,
                "{}: line {}, col {}, {} - {}",
                report.file_path,
                message.line,
                message.column,
                message_type(message),
                message.message
            );
            if let Some(rule) = &message.rule_id {
                let _ = write!(output, " ({rule})");
            }
            output.push('\n');
        }
    }
    output.push_str(&problem_total(reports));
    output
}
