//! HTTP surface of the companion session service.

mod handlers;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::{error, info};
use vrc::{Catalog, SessionService};
use vrc_runtime::PlaceholderLauncher;

use crate::config::ServeConfig;
use crate::error::Result;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SessionService>,
}

/// Builds the API router over a session service.
pub fn router(service: Arc<SessionService>) -> Router {
	Router::new()
		.route("/status", get(handlers::status))
		.route("/library", get(handlers::library))
		.route("/launch", post(handlers::launch))
		.route("/end", post(handlers::end))
		.with_state(AppState { service })
}

/// Runs the companion service until ctrl-c.
pub async fn serve(config: ServeConfig) -> Result<()> {
	let service = Arc::new(SessionService::with_run_window(
		Catalog::builtin(),
		Arc::new(PlaceholderLauncher),
		config.run_window,
	));
	let app = router(service);

	let listener = tokio::net::TcpListener::bind(config.bind).await?;
	let addr = listener.local_addr()?;
	info!(target = "vrc.http", %addr, run_secs = config.run_window.as_secs(), "companion service listening");
	println!("Companion service listening on http://{addr}");
	println!("Press Ctrl+C to stop.");

	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	Ok(())
}

async fn shutdown_signal() {
	wait_for_shutdown(tokio::signal::ctrl_c()).await;
	info!(target = "vrc.http", "shutdown signal received");
}

/// Completes once `signal` delivers; a handler that cannot be
/// installed parks forever instead of completing.
async fn wait_for_shutdown(signal: impl Future<Output = std::io::Result<()>>) {
	if let Err(err) = signal.await {
		error!(target = "vrc.http", error = %err, "shutdown signal handler unavailable; serving until killed");
		std::future::pending::<()>().await;
	}
}
