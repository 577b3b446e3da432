use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to read {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no {key} configured; set \"{key}\" in config.json or pass {flag}")]
    MissingSetting { key: &'static str, flag: &'static str },

    #[error("invalid server URL \"{0}\"")]
    InvalidUrl(String),

    #[error("could not connect to the lint server at {url}; check that \"eslintServerURL\" is configured correctly")]
    Connect {
        url: String,
        #[source]
        source: tonic::transport::Error,
    },

    #[error("could not read {path}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("LintFile failed: {0}")]
    Rpc(#[from] tonic::Status),

    #[error("could not parse the server response")]
    Response(#[source] serde_json::Error),

    #[error("could not write the report")]
    Report(#[source] std::io::Error),

    #[error("could not watch the workspace")]
    Watch(#[from] notify::Error),
}
