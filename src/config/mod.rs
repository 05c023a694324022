//! Configuration source subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & parse into a raw table)
//!     → record.rs (typed field access, failures carry their context)
//!     → compiler (semantic checks, builds the routing model)
//! ```
//!
//! # Design Decisions
//! - The raw table never leaves this module; the compiler only sees
//!   `ConfigRecord` accessors
//! - Tables keep document order so routes and settings load in the order
//!   they were written
//! - One error type for loading and compiling

pub mod error;
pub mod loader;
pub mod record;

pub use error::{ConfigError, ConfigResult};
pub use loader::{load_config, ConfigSource};
pub use record::ConfigRecord;
