//! Wire types for the companion session API.
//!
//! This crate contains the serde-serializable types exchanged with the
//! companion service over HTTP+JSON. These types represent the "protocol
//! layer" - the shapes of data as they appear on the wire.
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond construction and serialization
//! * 1:1 with the API: One type per request/response body
//! * Stable: Changes only when the wire contract changes
//!
//! Higher-level session behavior is built on top of these types in `vrc-rs`.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
