//! CLI error type shared by all commands.

use thiserror::Error;

use crate::client::ClientError;

/// Convenience alias for command results.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by `vrc` commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Free-form failure context.
	#[error("{0}")]
	Context(String),

	/// Socket or filesystem error.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// Remote companion call failure.
	#[error(transparent)]
	Client(#[from] ClientError),
}
