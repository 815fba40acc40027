//! Response bodies produced by the companion session API.

use serde::{Deserialize, Serialize};

/// Value carried by [`StatusResponse`] while the service is alive.
pub const STATUS_ONLINE: &str = "online";

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
	pub status: String,
}

impl StatusResponse {
	/// Creates the canonical online answer.
	pub fn online() -> Self {
		Self {
			status: STATUS_ONLINE.to_string(),
		}
	}
}

/// Confirmation body of a successful `POST /launch` or `POST /end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
	pub message: String,
}

/// Structured error body carried by every non-success answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
}

/// Body of `GET /library`: launchable packages as a bare JSON array.
pub type LibraryResponse = Vec<String>;
