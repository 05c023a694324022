//! Routing model.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     config records
//!     → compiler builds backends, hosts, server
//!     → Server (hosts → route tables → backends)
//!     → handed to the serving runtime, immutable from then on
//! ```
//!
//! # Design Decisions
//! - Server owns its hosts; hosts own their route tables
//! - Handlers are owned by the server's registry and shared by routes
//! - No locks: nothing mutates the model after compilation

pub mod backend;
pub mod host;
pub mod registry;
pub mod server;

pub use backend::{Backend, BackendKind, Dir, Handler, HandlerProtocol, Proxy};
pub use host::Host;
pub use registry::HandlerRegistry;
pub use server::Server;
