//! Session error taxonomy.

use thiserror::Error;

/// Convenience alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by session operations.
///
/// Display strings are the wire-facing messages returned to callers;
/// the wire layer maps variants to HTTP statuses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
	/// Request carried no usable package identifier.
	#[error("Package is required")]
	MissingPackage,

	/// Package is not a launchable catalog member.
	#[error("Game not found")]
	UnknownPackage(String),

	/// Package already holds its running slot.
	#[error("Game already running")]
	AlreadyRunning(String),

	/// Package has no running instance to end.
	#[error("Game not running")]
	NotRunning(String),
}
