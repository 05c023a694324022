//! Configuration compiler.
//!
//! # Data Flow
//! ```text
//! ConfigSource
//!     → server.rs  (find the named server, build the shell)
//!     → hosts.rs   (one Host per `hosts` entry, default host resolution)
//!     → routes.rs  (route table per host, handler deduplication)
//!     → backend.rs (dir / proxy / handler from a route record)
//!     → Server
//!
//! ConfigSource
//!     → globals.rs (settings + mimetypes, once per process)
//!     → Globals
//! ```
//!
//! # Design Decisions
//! - Single-threaded and synchronous; runs once before traffic is served
//! - All or nothing: a failing route fails its host, a failing host fails
//!   the server, and nothing partial is returned
//! - Handler identity collisions on one side only are warnings

pub mod backend;
pub mod globals;
pub mod hosts;
pub mod routes;
pub mod server;

pub use globals::{load_globals, load_mimetypes, load_settings};
pub use server::{compile, compile_server, find_server};
