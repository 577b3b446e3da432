use std::fmt::Write;

use common::FileReport;

use super::{message_type, problem_total};

/// `path:L:C: message [Error/rule]`, the layout editors and grep understand
pub(super) fn format(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports {
        for message in &report.messages {
            let _ = write!(
                output,
                "{}:{}:{}: {} [{}",
                report.file_path,
                message.line,
                message.column,
                message.message,
                message_type(message)
            );
            if let Some(rule) = &message.rule_id {
                let _ = write!(output, "/{rule}");
            }
            output.push_str("]\n");
        }
    }
    output.push_str(&problem_total(reports));
    output
}

#[cfg(test)]
mod tests {
    use common::Severity;

    use super::super::tests::{message, sample_report};
    use super::*;

    #[test]
    fn test_unix_layout() {
        insta::assert_snapshot!(format(&[sample_report()]), @r"
        src/app.js:1:5: 'x' is assigned a value but never used. [Error/no-unused-vars]
        src/app.js:12:9: Expected '===' and instead saw '=='. [Warning/eqeqeq]

        2 problems
        ");
    }

    #[test]
    fn test_single_problem_and_missing_rule() {
        let mut fatal = message("", Severity::Error, 3, 1, "Unexpected token");
        fatal.rule_id = None;
        let report = FileReport::new("a.js", vec![fatal]);
        assert_eq!(format(&[report]), "a.js:3:1: Unexpected token [Error]\n\n1 problem");
    }
}
