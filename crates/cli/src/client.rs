//! HTTP client for the companion session service.
//!
//! Implements the remote-control contract shared with chat front ends:
//! a short connection probe before anything else, client-side catalog
//! validation before mutating calls, and collapse of every transport
//! fault into the single not-connected message.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;
use url::Url;
use vrc_protocol::{EndRequest, ErrorResponse, LaunchRequest, MessageResponse, STATUS_ONLINE, StatusResponse};

use crate::config::ClientConfig;

/// Connection probe timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors surfaced by remote companion calls.
///
/// Display strings are the user-facing messages. Transport faults of any
/// kind (refused connection, timeout, bad payload) all map to
/// [`ClientError::NotConnected`]; only a structured service rejection
/// keeps its own message.
#[derive(Debug, Error)]
pub enum ClientError {
	/// Probe failed or a transport fault occurred.
	#[error("Companion app not connected.")]
	NotConnected,

	/// Package failed client-side catalog validation.
	#[error("Invalid game package.")]
	InvalidPackage(String),

	/// Service answered with a structured error payload.
	#[error("{message}")]
	Rejected { message: String },
}

impl From<reqwest::Error> for ClientError {
	fn from(err: reqwest::Error) -> Self {
		debug!(target = "vrc.client", error = %err, "transport fault");
		ClientError::NotConnected
	}
}

/// Typed client over the companion HTTP API.
#[derive(Debug, Clone)]
pub struct CompanionClient {
	http: reqwest::Client,
	base_url: Url,
}

impl CompanionClient {
	/// Creates a client for the given configuration.
	pub fn new(config: &ClientConfig) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: config.base_url.clone(),
		}
	}

	/// Probes the service within [`PROBE_TIMEOUT`].
	///
	/// Any transport fault or non-online answer counts as offline; no
	/// error is surfaced.
	pub async fn is_online(&self) -> bool {
		let request = self.http.get(self.endpoint("status")).timeout(PROBE_TIMEOUT).send().await;
		match request {
			Ok(response) => response
				.json::<StatusResponse>()
				.await
				.map(|answer| answer.status == STATUS_ONLINE)
				.unwrap_or(false),
			Err(err) => {
				debug!(target = "vrc.client", error = %err, "status probe failed");
				false
			}
		}
	}

	/// Fetches the launchable package list.
	pub async fn library(&self) -> Result<Vec<String>, ClientError> {
		let response = self.http.get(self.endpoint("library")).send().await?;
		Ok(response.json::<Vec<String>>().await?)
	}

	/// Checks `package` against the service catalog, case-insensitively.
	pub async fn validate_package(&self, package: &str) -> Result<bool, ClientError> {
		let wanted = package.to_lowercase();
		let packages = self.library().await?;
		Ok(packages.iter().any(|p| p.to_lowercase() == wanted))
	}

	/// Requests a launch and returns the service confirmation message.
	pub async fn launch(&self, package: &str) -> Result<String, ClientError> {
		self.post_package(
			"launch",
			&LaunchRequest {
				package: package.to_string(),
			},
		)
		.await
	}

	/// Requests an end and returns the service confirmation message.
	pub async fn end(&self, package: &str) -> Result<String, ClientError> {
		self.post_package(
			"end",
			&EndRequest {
				package: package.to_string(),
			},
		)
		.await
	}

	async fn post_package<T: serde::Serialize>(&self, path: &str, body: &T) -> Result<String, ClientError> {
		let response = self.http.post(self.endpoint(path)).json(body).send().await?;
		let status = response.status();

		if status.is_success() {
			let confirmation = response.json::<MessageResponse>().await?;
			return Ok(confirmation.message);
		}

		let fallback = format!("Service rejected the request ({status})");
		let message = response
			.json::<ErrorResponse>()
			.await
			.map(|payload| payload.error)
			.unwrap_or(fallback);
		debug!(target = "vrc.client", %status, %message, "service rejected request");
		Err(ClientError::Rejected { message })
	}

	fn endpoint(&self, path: &str) -> Url {
		let mut url = self.base_url.clone();
		url.set_path(path);
		url
	}
}
