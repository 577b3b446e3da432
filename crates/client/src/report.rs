//! `--report` mode: lint the whole workspace once and append every finding
//! to a CSV file

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use common::FileReport;
use tracing::warn;
use walkdir::WalkDir;

use crate::error::ClientError;
use crate::lint::{is_lintable, LintClient};
use crate::output;

pub const REPORT_FILE: &str = "report.csv";

/// Appends `fileName,line,column,severity,message,ruleId` rows
pub struct CsvReport<W: Write> {
    out: W,
}

impl CsvReport<BufWriter<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn append(&mut self, file_name: &str, report: &FileReport) -> io::Result<()> {
        for message in &report.messages {
            let row = [
                file_name.to_string(),
                message.line.to_string(),
                message.column.to_string(),
                u8::from(message.severity).to_string(),
                message.message.clone(),
                message.rule_id.clone().unwrap_or_default(),
            ];
            let line: Vec<String> = row.iter().map(|field| escape(field)).collect();
            writeln!(self.out, "{}", line.join(","))?;
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Quote a field when it holds a separator, a quote or a line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) || field.starts_with(' ') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `.js` files under `root`, in a stable order
pub fn workspace_sources(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_lintable(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

/// Lint every source in the workspace; returns how many files were linted
pub async fn run(client: &mut LintClient, workspace: &Path) -> Result<usize, ClientError> {
    let mut csv = CsvReport::open(Path::new(REPORT_FILE)).map_err(ClientError::Report)?;
    let mut linted = 0;

    for path in workspace_sources(workspace) {
        let report = match client.lint_path(&path).await {
            Ok(report) => report,
            Err(err) => {
                warn!(file = %path.display(), error = %err, "lint failed");
                continue;
            }
        };
        csv.append(&path.to_string_lossy(), &report).map_err(ClientError::Report)?;
        output::print_report(&report);
        linted += 1;
    }
    Ok(linted)
}
