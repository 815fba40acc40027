//! Companion session service core.
//!
//! Owns the catalog of launchable VR applications and the set of
//! currently running instances, and drives the launch/end lifecycle
//! around a pluggable [`vrc_runtime::Launcher`]. The HTTP surface in
//! `vrc-cli` is a thin wire layer over [`SessionService`].

pub mod catalog;
pub mod error;
pub mod running;
pub mod service;

pub use catalog::{AppKind, Catalog, CatalogEntry, canonical};
pub use error::{Result, SessionError};
pub use running::{RunTicket, RunningApp, RunningSet};
pub use service::{Ended, Launched, SessionService};
