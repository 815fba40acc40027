//! Launcher trait and the placeholder run-window implementation.

use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Default seconds a launched application holds its running slot.
pub const DEFAULT_RUN_SECS: u64 = 10;

/// How a launched run reached its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
	/// The run window elapsed without interruption.
	Completed,
	/// The run was cancelled before the window elapsed.
	Cancelled,
}

/// Executes one launched application run.
#[async_trait]
pub trait Launcher: Send + Sync {
	/// Runs `package` until the window elapses or `cancel` fires,
	/// whichever happens first.
	async fn run(&self, package: &str, window: Duration, cancel: CancellationToken) -> RunOutcome;
}

/// Stand-in runtime that holds the running slot for the whole window.
///
/// No OS process is spawned; a "running" application is bookkeeping only.
/// Real VR process control replaces this behind [`Launcher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderLauncher;

#[async_trait]
impl Launcher for PlaceholderLauncher {
	async fn run(&self, package: &str, window: Duration, cancel: CancellationToken) -> RunOutcome {
		debug!(target = "vrc.runtime", %package, window_ms = window.as_millis() as u64, "run window opened");
		tokio::select! {
			_ = cancel.cancelled() => RunOutcome::Cancelled,
			_ = tokio::time::sleep(window) => RunOutcome::Completed,
		}
	}
}
