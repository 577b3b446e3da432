//! Server configuration: CLI flags over an optional TOML file.
//!
//! The file is `lint-rpc.toml` in the working directory unless `--config`
//! names another one. Defaults:
//! - `listen`: `127.0.0.1:4040`
//! - `formatter`: `stylish`
//! - `placeholder_file_name`: `tempfile.js`
//! - `honor_file_name`: true
//! - `envs`: `["browser"]`, `plugins`: `["security"]`, no rule overrides
//!
//! Overrides precedence: CLI > config file > defaults.

use std::collections::BTreeMap;
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use common::{EngineOptions, RuleSeverity, DEFAULT_FORMATTER, PLACEHOLDER_FILE_NAME};
use serde::Deserialize;

use crate::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "lint-rpc.toml";

pub const DEFAULT_LISTEN: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::LOCALHOST),
    4040,
);

#[derive(Debug, Default, Parser)]
#[command(
    name = "lint-server",
    version,
    about = "Serve JavaScript lint reports over gRPC",
    long_about = "Serve JavaScript lint reports over gRPC.\n\nConfiguration precedence: CLI > lint-rpc.toml > defaults.",
    after_help = "Examples:\n  lint-server\n  lint-server --listen 0.0.0.0:4040 --env node --plugin security\n  RUST_LOG=lint_rpc=debug lint-server --config ci/lint-rpc.toml"
)]
/// Command line flags for the server binary
pub struct Cli {
    #[arg(long, help = "Address to listen on (default: 127.0.0.1:4040)")]
    pub listen: Option<SocketAddr>,
    #[arg(long, help = "Path to a TOML config file (default: ./lint-rpc.toml if present)")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Default report formatter: stylish|json|compact|unix")]
    pub formatter: Option<String>,
    #[arg(long = "env", help = "Enable a rule environment; repeat to enable several")]
    pub envs: Vec<String>,
    #[arg(long = "plugin", help = "Register a rule plugin; repeat to register several")]
    pub plugins: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
/// Contents of the TOML config file; every key is optional
pub struct FileConfig {
    pub listen: Option<SocketAddr>,
    pub formatter: Option<String>,
    pub placeholder_file_name: Option<String>,
    pub honor_file_name: Option<bool>,
    pub envs: Option<Vec<String>>,
    pub plugins: Option<Vec<String>>,
    #[serde(default)]
    pub rules: BTreeMap<String, RuleSeverity>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fully-resolved configuration after applying precedence
pub struct ServerConfig {
    pub listen: SocketAddr,
    pub formatter: String,
    pub placeholder_file_name: String,
    pub honor_file_name: bool,
    pub engine: EngineOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN,
            formatter: DEFAULT_FORMATTER.to_string(),
            placeholder_file_name: PLACEHOLDER_FILE_NAME.to_string(),
            honor_file_name: true,
            engine: EngineOptions::default(),
        }
    }
}

impl ServerConfig {
    /// Read the config file named by `--config`, or the default file if it
    /// exists, and merge the CLI flags over it
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                FileConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => FileConfig::default(),
        };
        Ok(Self::resolve(cli, file))
    }

    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        let envs = non_empty(&cli.envs).or(file.envs).unwrap_or(defaults.engine.envs);
        let plugins = non_empty(&cli.plugins).or(file.plugins).unwrap_or(defaults.engine.plugins);

        Self {
            listen: cli.listen.or(file.listen).unwrap_or(defaults.listen),
            formatter: cli.formatter.clone().or(file.formatter).unwrap_or(defaults.formatter),
            placeholder_file_name: file
                .placeholder_file_name
                .unwrap_or(defaults.placeholder_file_name),
            honor_file_name: file.honor_file_name.unwrap_or(defaults.honor_file_name),
            engine: EngineOptions { envs, plugins, rules: file.rules },
        }
    }
}

fn non_empty(values: &[String]) -> Option<Vec<String>> {
    (!values.is_empty()).then(|| values.to_vec())
}
