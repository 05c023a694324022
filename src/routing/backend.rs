//! Backend variants a route can dispatch to.
//!
//! # Responsibilities
//! - Represent static directories, upstream proxies and message handlers
//! - Expose the handler identity used for deduplication
//!
//! # Design Decisions
//! - Directory and proxy backends are owned by their route
//! - Handlers are shared through `Arc`: every route pointing at the same
//!   send/recv pair holds the same allocation

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

/// Backend type tag as written in route records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Dir,
    Proxy,
    Handler,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Dir => "dir",
            BackendKind::Proxy => "proxy",
            BackendKind::Handler => "handler",
        }
    }
}

impl FromStr for BackendKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dir" => Ok(BackendKind::Dir),
            "proxy" => Ok(BackendKind::Proxy),
            "handler" => Ok(BackendKind::Handler),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directory served from disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dir {
    /// Base path files are served from.
    pub base: String,
    /// File served for directory requests.
    pub index_file: String,
    /// Content type used when the extension is unknown.
    pub default_ctype: String,
    /// Cache lifetime in seconds; zero disables caching.
    pub cache_ttl: i64,
}

impl Dir {
    pub fn new(
        base: impl Into<String>,
        index_file: impl Into<String>,
        default_ctype: impl Into<String>,
        cache_ttl: i64,
    ) -> Self {
        Self {
            base: base.into(),
            index_file: index_file.into(),
            default_ctype: default_ctype.into(),
            cache_ttl,
        }
    }

    /// Cache lifetime, or `None` when caching is off.
    pub fn cache_ttl(&self) -> Option<Duration> {
        u64::try_from(self.cache_ttl)
            .ok()
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// An upstream HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proxy {
    pub addr: String,
    /// Kept as configured; range checks belong to the runtime.
    pub port: i64,
}

impl Proxy {
    pub fn new(addr: impl Into<String>, port: i64) -> Self {
        Self {
            addr: addr.into(),
            port,
        }
    }

    /// True if the port is a usable TCP port.
    pub fn port_in_range(&self) -> bool {
        (1..=65535).contains(&self.port)
    }
}

/// Wire protocol spoken with a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlerProtocol {
    #[default]
    Json,
    Tnet,
}

/// An external process reached over a send/recv socket pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handler {
    pub send_spec: String,
    pub send_ident: String,
    pub recv_spec: String,
    pub recv_ident: String,
    pub protocol: HandlerProtocol,
    /// Pass payloads through without framing.
    pub raw: bool,
}

impl Handler {
    pub fn new(
        send_spec: impl Into<String>,
        send_ident: impl Into<String>,
        recv_spec: impl Into<String>,
        recv_ident: impl Into<String>,
    ) -> Self {
        Self {
            send_spec: send_spec.into(),
            send_ident: send_ident.into(),
            recv_spec: recv_spec.into(),
            recv_ident: recv_ident.into(),
            protocol: HandlerProtocol::default(),
            raw: false,
        }
    }

    /// Identity key used for deduplication.
    pub fn identity(&self) -> (&str, &str) {
        (self.send_spec.as_str(), self.recv_spec.as_str())
    }

    pub fn same_send(&self, other: &Handler) -> bool {
        self.send_spec == other.send_spec
    }

    pub fn same_recv(&self, other: &Handler) -> bool {
        self.recv_spec == other.recv_spec
    }
}

/// What a route resolves to.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Backend {
    Dir(Dir),
    Proxy(Proxy),
    Handler(Arc<Handler>),
}

impl Backend {
    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::Dir(_) => BackendKind::Dir,
            Backend::Proxy(_) => BackendKind::Proxy,
            Backend::Handler(_) => BackendKind::Handler,
        }
    }

    pub fn as_dir(&self) -> Option<&Dir> {
        match self {
            Backend::Dir(dir) => Some(dir),
            _ => None,
        }
    }

    pub fn as_proxy(&self) -> Option<&Proxy> {
        match self {
            Backend::Proxy(proxy) => Some(proxy),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Arc<Handler>> {
        match self {
            Backend::Handler(handler) => Some(handler),
            _ => None,
        }
    }
}
