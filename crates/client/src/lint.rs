use std::fs;
use std::path::Path;
use std::time::Duration;

use common::FileReport;
use lint_rpc::{EsLintRequest, EsLintServiceClient};
use tonic::transport::{Channel, Endpoint};

use crate::error::ClientError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Only JavaScript sources are sent to the server
pub fn is_lintable(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "js")
}

/// Sends files to the server and decodes the JSON report it returns
#[derive(Debug, Clone)]
pub struct LintClient {
    inner: EsLintServiceClient<Channel>,
}

impl LintClient {
    pub async fn connect(url: &str) -> Result<Self, ClientError> {
        let channel = Endpoint::from_shared(url.to_string())
            .map_err(|_| ClientError::InvalidUrl(url.to_string()))?
            .connect_timeout(CONNECT_TIMEOUT)
            .connect()
            .await
            .map_err(|source| ClientError::Connect { url: url.to_string(), source })?;
        Ok(Self { inner: EsLintServiceClient::new(channel) })
    }

    pub async fn lint_path(&mut self, path: &Path) -> Result<FileReport, ClientError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ClientError::ReadSource { path: path.to_path_buf(), source })?;
        self.lint_text(content, &path.to_string_lossy()).await
    }

    pub async fn lint_text(&mut self, content: String, file_name: &str) -> Result<FileReport, ClientError> {
        let request = EsLintRequest {
            file_content: content,
            file_name: file_name.to_string(),
            format: "json".to_string(),
        };
        let errors = self.inner.lint_file(request).await?.into_inner().errors;
        parse_report(&errors, file_name)
    }
}

/// An empty body means the file is clean
pub fn parse_report(body: &str, file_name: &str) -> Result<FileReport, ClientError> {
    if body.trim().is_empty() {
        return Ok(FileReport::new(file_name, Vec::new()));
    }
    let reports: Vec<FileReport> = serde_json::from_str(body).map_err(ClientError::Response)?;
    Ok(reports
        .into_iter()
        .next()
        .unwrap_or_else(|| FileReport::new(file_name, Vec::new())))
}
