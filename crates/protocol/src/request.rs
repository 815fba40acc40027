//! Request bodies accepted by the companion session API.

use serde::{Deserialize, Serialize};

/// Body of `POST /launch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
	/// Package identifier of the application to launch.
	pub package: String,
}

/// Body of `POST /end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndRequest {
	/// Package identifier of the running application to end.
	pub package: String,
}
