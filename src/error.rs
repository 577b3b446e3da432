use std::net::SocketAddr;
use std::path::PathBuf;

use js_linter::LintError;
use thiserror::Error;
use tonic::Status;

/// Errors while loading the server configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Transport(#[from] tonic::transport::Error),
}

/// Errors raised while serving a lint request
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Lint(#[from] LintError),

    #[error("lint task failed")]
    Task(#[from] tokio::task::JoinError),
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Lint(
                err @ (LintError::Parse { .. }
                | LintError::TooDeep { .. }
                | LintError::UnknownFormatter(_)),
            ) => Status::invalid_argument(err.to_string()),
            ServiceError::Lint(err) => Status::internal(err.to_string()),
            ServiceError::Task(err) => Status::internal(format!("lint task failed: {err}")),
        }
    }
}
