//! Lint RPC server
//!
//! Exposes a JavaScript lint engine over gRPC. A client sends the text of a
//! file and receives the formatted lint report as a single string.
//!
//! ```text
//! Client                                       Server
//! │  EsLintRequest{fileContent, fileName}        │
//! │ ────────────────────────────────────────────>│  lint_text + format
//! │       EsLintResponse{errors: "<report>"}     │
//! │<──────────────────────────────────────────── │
//! ```
//!
//! The engine is built once at startup and shared by every request.

pub mod proto {
    #![allow(missing_docs)]
    #![allow(clippy::doc_markdown)]
    tonic::include_proto!("proto");
}

pub mod config;
mod error;
mod server;
mod service;

pub use config::{Cli, FileConfig, ServerConfig};
pub use error::{ConfigError, ServeError, ServiceError};
pub use server::{runtime, serve, serve_with_incoming, THREAD_STACK_SIZE};
pub use service::{LintEngine, LintService};

// Re-export proto types for convenience
pub use proto::{
    es_lint_service_client::EsLintServiceClient,
    es_lint_service_server::EsLintServiceServer, EsLintRequest, EsLintResponse,
};
