//! Route compiler library
//!
//! Compiles a declarative server configuration (servers → hosts → routes →
//! backends) into a validated, fully linked routing model for an HTTP
//! serving runtime, and loads the process-wide settings and MIME maps.

pub mod adt;
pub mod compiler;
pub mod config;
pub mod globals;
pub mod observability;
pub mod routing;

pub use compiler::{compile_server, load_globals};
pub use config::{load_config, ConfigError, ConfigSource};
pub use globals::{Globals, MimeTypes, Settings};
pub use routing::Server;
