//! Launch/end orchestration over the catalog and running set.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use vrc_runtime::{DEFAULT_RUN_SECS, Launcher};

use crate::catalog::Catalog;
use crate::error::{Result, SessionError};
use crate::running::RunningSet;

/// Accepted launch, echoing the catalog-cased package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launched {
	pub package: String,
}

/// Completed end, echoing the catalog-cased package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ended {
	pub package: String,
}

/// The session service: owns the catalog and the running set, and
/// spawns one unit of work per accepted launch.
pub struct SessionService {
	catalog: Catalog,
	running: Arc<RunningSet>,
	launcher: Arc<dyn Launcher>,
	run_window: Duration,
}

impl SessionService {
	/// Creates a service with the default run window.
	pub fn new(catalog: Catalog, launcher: Arc<dyn Launcher>) -> Self {
		Self::with_run_window(catalog, launcher, Duration::from_secs(DEFAULT_RUN_SECS))
	}

	/// Creates a service with an explicit run window.
	pub fn with_run_window(catalog: Catalog, launcher: Arc<dyn Launcher>, run_window: Duration) -> Self {
		Self {
			catalog,
			running: Arc::new(RunningSet::new()),
			launcher,
			run_window,
		}
	}

	/// Returns the launchable packages in catalog order.
	pub fn library(&self) -> Vec<String> {
		self.catalog.packages()
	}

	/// Returns whether `package` currently holds a running slot.
	pub fn is_running(&self, package: &str) -> bool {
		self.running.contains(package)
	}

	/// Accepts a launch and spawns its unit of work.
	///
	/// Returns as soon as the running-set insert is committed and the
	/// task is spawned. The task holds the slot for the run window and
	/// then releases it, unless [`end`](Self::end) cancels it first; a
	/// release that lost its slot to a newer run is a no-op.
	pub fn launch(&self, package: &str) -> Result<Launched> {
		let package = package.trim();
		if package.is_empty() {
			return Err(SessionError::MissingPackage);
		}

		let entry = self
			.catalog
			.resolve(package)
			.ok_or_else(|| SessionError::UnknownPackage(package.to_string()))?;
		let resolved = entry.package.clone();

		let ticket = self
			.running
			.begin(&resolved)
			.ok_or_else(|| SessionError::AlreadyRunning(resolved.clone()))?;

		info!(target = "vrc.session", package = %resolved, run_id = ticket.run_id, "launch accepted");

		let running = Arc::clone(&self.running);
		let launcher = Arc::clone(&self.launcher);
		let window = self.run_window;
		let task_package = resolved.clone();
		tokio::spawn(async move {
			let outcome = launcher.run(&task_package, window, ticket.cancel.clone()).await;
			let released = running.finish(&task_package, ticket.run_id);
			debug!(
				target = "vrc.session",
				package = %task_package,
				run_id = ticket.run_id,
				outcome = ?outcome,
				released,
				"run finished"
			);
		});

		Ok(Launched { package: resolved })
	}

	/// Ends a running instance.
	///
	/// The instance leaves the running set before this returns; the
	/// cancellation signal then stops its unit of work cooperatively.
	pub fn end(&self, package: &str) -> Result<Ended> {
		let package = package.trim();
		if package.is_empty() {
			return Err(SessionError::MissingPackage);
		}

		let app = self
			.running
			.end(package)
			.ok_or_else(|| SessionError::NotRunning(package.to_string()))?;
		app.cancel.cancel();

		info!(
			target = "vrc.session",
			package = %app.package,
			run_id = app.run_id,
			uptime_ms = app.started_at.elapsed().as_millis() as u64,
			"instance ended"
		);

		Ok(Ended { package: app.package })
	}
}
