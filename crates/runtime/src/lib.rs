//! Launch execution runtime for the companion session service.
//!
//! The service tracks which applications are running; this crate owns
//! *how* a launched application actually runs. The [`Launcher`] trait is
//! the seam where OS-level VR process control plugs in; the shipped
//! [`PlaceholderLauncher`] only holds the running slot for a fixed window.

pub mod launcher;

pub use launcher::{DEFAULT_RUN_SECS, Launcher, PlaceholderLauncher, RunOutcome};
pub use tokio_util::sync::CancellationToken;
