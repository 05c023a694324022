//! The compiled server: listener settings, hosts and shared handlers.

use serde::Serialize;

use crate::config::{ConfigError, ConfigResult};
use crate::routing::host::Host;
use crate::routing::registry::HandlerRegistry;

/// A fully linked server, ready to be handed to the serving runtime.
///
/// Immutable once compiled; share it behind an `Arc` to read it from
/// several threads.
#[derive(Debug, Clone, Serialize)]
pub struct Server {
    pub uuid: String,
    /// Name of the host that serves requests no other host matches.
    pub default_hostname: String,
    pub bind_addr: String,
    pub port: i64,
    pub access_log: String,
    pub error_log: String,
    pub pid_file: String,
    pub use_ssl: bool,

    hosts: Vec<Host>,
    handlers: HandlerRegistry,
    #[serde(skip)]
    default_host: Option<usize>,
}

impl Server {
    /// An empty server shell with no hosts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        uuid: impl Into<String>,
        default_hostname: impl Into<String>,
        bind_addr: impl Into<String>,
        port: i64,
        access_log: impl Into<String>,
        error_log: impl Into<String>,
        pid_file: impl Into<String>,
        use_ssl: bool,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            default_hostname: default_hostname.into(),
            bind_addr: bind_addr.into(),
            port,
            access_log: access_log.into(),
            error_log: error_log.into(),
            pid_file: pid_file.into(),
            use_ssl,
            hosts: Vec::new(),
            handlers: HandlerRegistry::new(),
            default_host: None,
        }
    }

    /// Add a host, returning its index. Host names are unique.
    pub fn add_host(&mut self, host: Host) -> ConfigResult<usize> {
        if self.host(&host.name).is_some() {
            return Err(ConfigError::DuplicateHost {
                server: self.uuid.clone(),
                host: host.name,
            });
        }
        self.hosts.push(host);
        Ok(self.hosts.len() - 1)
    }

    /// Mark the host at `index` as the default host. Later calls win.
    pub(crate) fn set_default_host(&mut self, index: usize) {
        debug_assert!(index < self.hosts.len());
        self.default_host = Some(index);
    }

    pub fn default_host(&self) -> Option<&Host> {
        self.default_host.and_then(|i| self.hosts.get(i))
    }

    pub fn host(&self, name: &str) -> Option<&Host> {
        self.hosts.iter().find(|h| h.name == name)
    }

    /// Hosts in configuration order.
    pub fn hosts(&self) -> &[Host] {
        &self.hosts
    }

    pub fn handlers(&self) -> &HandlerRegistry {
        &self.handlers
    }

    pub(crate) fn handlers_mut(&mut self) -> &mut HandlerRegistry {
        &mut self.handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Server {
        Server::new(
            "2f62bd5-9e59-49cd-993c-3b6013c28f05",
            "localhost",
            "0.0.0.0",
            6767,
            "/logs/access.log",
            "/logs/error.log",
            "/run/server.pid",
            false,
        )
    }

    #[test]
    fn test_add_hosts_and_default() {
        let mut server = shell();
        assert!(server.default_host().is_none());

        server.add_host(Host::new("example.com", "example.com")).unwrap();
        let index = server.add_host(Host::new("localhost", "localhost")).unwrap();
        server.set_default_host(index);

        assert_eq!(server.hosts().len(), 2);
        assert_eq!(server.default_host().unwrap().name, "localhost");
        assert_eq!(server.host("example.com").unwrap().matching, "example.com");
    }

    #[test]
    fn test_duplicate_host_rejected() {
        let mut server = shell();
        server.add_host(Host::new("localhost", "a")).unwrap();

        let err = server.add_host(Host::new("localhost", "b")).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateHost { ref host, .. } if host == "localhost"));
        assert_eq!(server.hosts().len(), 1);
    }

    #[test]
    fn test_serialize_summary() {
        let mut server = shell();
        server.add_host(Host::new("localhost", "localhost")).unwrap();

        let json = serde_json::to_value(&server).unwrap();
        assert_eq!(json["port"], 6767);
        assert_eq!(json["hosts"][0]["name"], "localhost");
        assert!(json["handlers"].as_array().unwrap().is_empty());
    }
}
