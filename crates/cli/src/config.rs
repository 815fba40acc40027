//! Runtime configuration for the service and remote commands.
//!
//! Every setting resolves flag, then environment, then default.

use std::net::SocketAddr;
use std::time::Duration;

use url::Url;

use crate::error::{CliError, Result};

/// Default listen address for `vrc serve`.
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
/// Default companion base URL for remote commands.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Environment override for the serve listen address.
pub const BIND_ENV: &str = "VRC_BIND";
/// Environment override for the run window, in seconds.
pub const RUN_SECS_ENV: &str = "VRC_RUN_SECS";
/// Environment override for the remote base URL.
pub const URL_ENV: &str = "VRC_URL";

/// Resolved `vrc serve` settings.
#[derive(Debug, Clone)]
pub struct ServeConfig {
	pub bind: SocketAddr,
	pub run_window: Duration,
}

impl ServeConfig {
	/// Resolves serve settings from flags, environment, and defaults.
	pub fn resolve(bind: Option<String>, run_secs: Option<u64>) -> Result<Self> {
		let bind = pick(bind, std::env::var(BIND_ENV).ok(), DEFAULT_BIND.to_string());
		let bind = bind
			.parse::<SocketAddr>()
			.map_err(|e| CliError::Context(format!("Invalid listen address {bind}: {e}")))?;

		let run_secs = match (run_secs, std::env::var(RUN_SECS_ENV).ok()) {
			(Some(flag), _) => flag,
			(None, Some(env)) => env
				.parse::<u64>()
				.map_err(|e| CliError::Context(format!("Invalid {RUN_SECS_ENV} value {env}: {e}")))?,
			(None, None) => vrc_runtime::DEFAULT_RUN_SECS,
		};

		Ok(Self {
			bind,
			run_window: Duration::from_secs(run_secs),
		})
	}
}

/// Resolved remote-command settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub base_url: Url,
}

impl ClientConfig {
	/// Resolves the companion base URL from flag, environment, and default.
	pub fn resolve(url: Option<String>) -> Result<Self> {
		let raw = pick(url, std::env::var(URL_ENV).ok(), DEFAULT_BASE_URL.to_string());
		let base_url = Url::parse(&raw).map_err(|e| CliError::Context(format!("Invalid companion URL {raw}: {e}")))?;
		Ok(Self { base_url })
	}
}

fn pick(flag: Option<String>, env: Option<String>, default: String) -> String {
	flag.or(env).unwrap_or(default)
}
