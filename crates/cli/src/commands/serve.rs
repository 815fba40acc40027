//! `vrc serve` - run the companion session service.

use crate::config::ServeConfig;
use crate::error::Result;
use crate::server;

/// Runs the service until interrupted.
pub async fn execute(config: ServeConfig) -> Result<()> {
	server::serve(config).await
}
