//! Virtual hosts and their route tables.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{ConfigError, ConfigResult};
use crate::routing::backend::Backend;

/// A virtual host: a name, the pattern used to select it, and its routes.
#[derive(Debug, Clone, Serialize)]
pub struct Host {
    pub name: String,
    /// Pattern matched against the request host during host selection.
    pub matching: String,
    routes: BTreeMap<String, Backend>,
}

impl Host {
    pub fn new(name: impl Into<String>, matching: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matching: matching.into(),
            routes: BTreeMap::new(),
        }
    }

    /// Add a route. Paths are unique within a host.
    pub fn add_backend(&mut self, path: impl Into<String>, backend: Backend) -> ConfigResult<()> {
        let path = path.into();
        if self.routes.contains_key(&path) {
            return Err(ConfigError::DuplicateRoute {
                host: self.name.clone(),
                path,
            });
        }
        self.routes.insert(path, backend);
        Ok(())
    }

    /// Backend registered for exactly this path.
    pub fn route(&self, path: &str) -> Option<&Backend> {
        self.routes.get(path)
    }

    /// All routes, ordered by path.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Backend)> {
        self.routes.iter().map(|(path, backend)| (path.as_str(), backend))
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
