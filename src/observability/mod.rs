//! Observability subsystem.
//!
//! The compiler reports through `tracing` events:
//! - info: every backend, route, host and server loaded
//! - warn: handlers sharing one side of their identity, proxy ports out of
//!   range, server ids that are not UUIDs

pub mod logging;
