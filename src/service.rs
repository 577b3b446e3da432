//! The `EsLintService` implementation

use std::sync::Arc;

use common::FileReport;
use js_linter::{LintError, Linter};
use tonic::{Request, Response, Status};
use tracing::{debug, info};

use crate::proto::es_lint_service_server::EsLintService;
use crate::proto::{EsLintRequest, EsLintResponse};
use crate::{ServerConfig, ServiceError};

/// The engine operations the service needs
pub trait LintEngine: Send + Sync + 'static {
    fn lint_text(&self, source_text: &str, file_name: &str) -> Result<FileReport, LintError>;

    fn format(&self, formatter: &str, reports: &[FileReport]) -> Result<String, LintError>;
}

impl LintEngine for Linter {
    fn lint_text(&self, source_text: &str, file_name: &str) -> Result<FileReport, LintError> {
        Linter::lint_text(self, source_text, file_name)
    }

    fn format(&self, formatter: &str, reports: &[FileReport]) -> Result<String, LintError> {
        Ok(self.formatter(formatter)?.format(reports))
    }
}

/// Lints each request with a shared engine
#[derive(Clone)]
pub struct LintService {
    engine: Arc<dyn LintEngine>,
    formatter: String,
    placeholder_file_name: String,
    honor_file_name: bool,
}

impl LintService {
    pub fn new(engine: Arc<dyn LintEngine>, config: &ServerConfig) -> Self {
        Self {
            engine,
            formatter: config.formatter.clone(),
            placeholder_file_name: config.placeholder_file_name.clone(),
            honor_file_name: config.honor_file_name,
        }
    }

    /// File name the engine sees for a request
    fn file_name<'r>(&'r self, request: &'r EsLintRequest) -> &'r str {
        if self.honor_file_name && !request.file_name.is_empty() {
            &request.file_name
        } else {
            &self.placeholder_file_name
        }
    }

    fn formatter<'r>(&'r self, request: &'r EsLintRequest) -> &'r str {
        if request.format.is_empty() {
            &self.formatter
        } else {
            &request.format
        }
    }

    pub fn lint(&self, request: &EsLintRequest) -> Result<String, ServiceError> {
        let file_name = self.file_name(request);
        let report = self.engine.lint_text(&request.file_content, file_name)?;
        info!(
            file = file_name,
            errors = report.error_count,
            warnings = report.warning_count,
            "linted file"
        );

        let formatted = self.engine.format(self.formatter(request), &[report])?;
        debug!(report = %formatted, "sending report");
        Ok(formatted)
    }
}

impl std::fmt::Debug for LintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LintService")
            .field("formatter", &self.formatter)
            .field("placeholder_file_name", &self.placeholder_file_name)
            .field("honor_file_name", &self.honor_file_name)
            .finish_non_exhaustive()
    }
}

#[tonic::async_trait]
impl EsLintService for LintService {
    async fn lint_file(
        &self,
        request: Request<EsLintRequest>,
    ) -> Result<Response<EsLintResponse>, Status> {
        let request = request.into_inner();
        // Analysis recurses over the syntax tree; keep it off the async workers
        let service = self.clone();
        let result = tokio::task::spawn_blocking(move || service.lint(&request))
            .await
            .map_err(ServiceError::from)
            .and_then(|result| result);
        let errors = result.map_err(|err| {
            info!(error = %err, "lint request failed");
            Status::from(err)
        })?;
        Ok(Response::new(EsLintResponse { errors }))
    }
}
