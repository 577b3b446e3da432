//! Client settings: `config.json` plus command line overrides.
//!
//! Overrides precedence: CLI > config.json. Both settings are required.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::error::ClientError;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Parser)]
#[command(
    name = "lint-client",
    version,
    about = "Lint JavaScript files in a workspace with a lint-rpc server",
    long_about = "Watches a workspace and prints the lint report of every saved .js file.\n\nWith --report, lints every .js file once and appends the findings to report.csv.",
    after_help = "Examples:\n  lint-client\n  lint-client --server 127.0.0.1:4040 --src ./app\n  lint-client --report"
)]
pub struct Cli {
    #[arg(long, help = "URL of the lint server (default: eslintServerURL in config.json)")]
    pub server: Option<String>,
    #[arg(long, help = "Workspace directory (default: workspacePath in config.json)")]
    pub src: Option<PathBuf>,
    #[arg(
        long,
        action = clap::ArgAction::SetTrue,
        help = "Lint every .js file in the workspace once and append the results to report.csv"
    )]
    pub report: bool,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, help = "Path to the JSON config file")]
    pub config: PathBuf,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
/// Contents of `config.json`
pub struct FileConfig {
    #[serde(rename = "workspacePath")]
    pub workspace_path: Option<PathBuf>,
    #[serde(rename = "eslintServerURL")]
    pub eslint_server_url: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ClientError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ClientError::ReadConfig { path: path.to_path_buf(), source })?;
        serde_json::from_str(&text)
            .map_err(|source| ClientError::ParseConfig { path: path.to_path_buf(), source })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub workspace: PathBuf,
    /// Server endpoint including the scheme
    pub server_url: String,
    pub report: bool,
}

impl ClientConfig {
    /// The config file is only read when a flag leaves a setting unset
    pub fn load(cli: &Cli) -> Result<Self, ClientError> {
        let file = if cli.server.is_some() && cli.src.is_some() {
            FileConfig::default()
        } else {
            match FileConfig::load(&cli.config) {
                Ok(file) => file,
                Err(err @ ClientError::ParseConfig { .. }) => return Err(err),
                Err(err) => {
                    tracing::debug!(error = %err, "no usable config file");
                    FileConfig::default()
                }
            }
        };
        Self::resolve(cli, file)
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, ClientError> {
        let workspace = cli.src.clone().or(file.workspace_path).ok_or(ClientError::MissingSetting {
            key: "workspacePath",
            flag: "--src",
        })?;
        let server = cli
            .server
            .clone()
            .or(file.eslint_server_url)
            .filter(|url| !url.trim().is_empty())
            .ok_or(ClientError::MissingSetting { key: "eslintServerURL", flag: "--server" })?;

        Ok(Self { workspace, server_url: with_scheme(server.trim()), report: cli.report })
    }
}

/// `host:port` becomes `http://host:port`
fn with_scheme(url: &str) -> String {
    if url.contains("://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("lint-client").chain(args.iter().copied()))
    }

    #[test]
    fn test_file_settings() {
        let file: FileConfig = serde_json::from_str(
            r#"{ "workspacePath": "/work/app", "eslintServerURL": "lint.internal:4040" }"#,
        )
        .unwrap();
        let config = ClientConfig::resolve(&cli(&[]), file).unwrap();
        assert_eq!(config.workspace, PathBuf::from("/work/app"));
        assert_eq!(config.server_url, "http://lint.internal:4040");
        assert!(!config.report);
    }

    #[test]
    fn test_flags_override_file() {
        let file = FileConfig {
            workspace_path: Some("/work/app".into()),
            eslint_server_url: Some("lint.internal:4040".into()),
        };
        let args = cli(&["--server", "https://lint.example.com", "--src", "./src", "--report"]);
        let config = ClientConfig::resolve(&args, file).unwrap();
        assert_eq!(config.workspace, PathBuf::from("./src"));
        assert_eq!(config.server_url, "https://lint.example.com");
        assert!(config.report);
    }

    #[test]
    fn test_missing_settings() {
        let err = ClientConfig::resolve(&cli(&["--server", "localhost:4040"]), FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingSetting { key: "workspacePath", .. }));

        let err = ClientConfig::resolve(&cli(&["--src", "."]), FileConfig::default()).unwrap_err();
        assert!(matches!(err, ClientError::MissingSetting { key: "eslintServerURL", .. }));
    }

    #[test]
    fn test_load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "workspacePath": "ws", "eslintServerURL": "127.0.0.1:4040" }}"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ClientConfig::load(&cli(&["--config", &path])).unwrap();
        assert_eq!(config.workspace, PathBuf::from("ws"));
        assert_eq!(config.server_url, "http://127.0.0.1:4040");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "workspacePath = ws").unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let err = ClientConfig::load(&cli(&["--config", &path])).unwrap_err();
        assert!(matches!(err, ClientError::ParseConfig { .. }));
    }
}
