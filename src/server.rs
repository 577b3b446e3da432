use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::runtime::{self, Runtime};
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::{info, warn};

use crate::proto::es_lint_service_server::EsLintServiceServer;
use crate::{LintEngine, LintService, ServeError, ServerConfig};

/// Stack size of runtime threads. Lint passes recurse once per nesting
/// level, and sources are capped well below what this stack holds.
pub const THREAD_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Multi-threaded runtime whose worker and blocking threads get [`THREAD_STACK_SIZE`]
pub fn runtime() -> std::io::Result<Runtime> {
    runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("lint-server")
        .thread_stack_size(THREAD_STACK_SIZE)
        .build()
}

/// Bind the configured address and serve until Ctrl-C
pub async fn serve(engine: Arc<dyn LintEngine>, config: &ServerConfig) -> Result<(), ServeError> {
    let listener = TcpListener::bind(config.listen)
        .await
        .map_err(|source| ServeError::Bind { addr: config.listen, source })?;
    let addr = listener.local_addr().unwrap_or(config.listen);
    info!(%addr, formatter = %config.formatter, "server running");

    let service = LintService::new(engine, config);
    serve_with_incoming(service, listener, shutdown_signal()).await?;

    info!("server stopped");
    Ok(())
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve_with_incoming(
    service: LintService,
    listener: TcpListener,
    shutdown: impl Future<Output = ()>,
) -> Result<(), tonic::transport::Error> {
    Server::builder()
        .add_service(EsLintServiceServer::new(service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl-C, shutting down"),
        Err(err) => {
            warn!(error = %err, "cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
