//! Server-wide handler deduplication.
//!
//! # Responsibilities
//! - Keep one handler per (send_spec, recv_spec) pair
//! - Warn when handlers share only one side of the pair
//!
//! # Design Decisions
//! - Linear scan: the registry is small and only touched at compile time
//! - Registration order is preserved so warnings are deterministic

use std::sync::Arc;

use serde::Serialize;

use crate::routing::backend::Handler;

/// Handlers owned by one server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct HandlerRegistry {
    handlers: Vec<Arc<Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the registered handler with the candidate's identity, or
    /// register the candidate if there is none.
    ///
    /// When an existing entry is returned the candidate is dropped.
    pub fn get_or_create(&mut self, candidate: Arc<Handler>) -> Arc<Handler> {
        for existing in &self.handlers {
            let same_send = existing.same_send(&candidate);
            let same_recv = existing.same_recv(&candidate);

            if same_send && same_recv {
                return Arc::clone(existing);
            } else if same_send {
                tracing::warn!(
                    send_spec = %candidate.send_spec,
                    "You have two handlers with the same send_spec"
                );
            } else if same_recv {
                tracing::warn!(
                    recv_spec = %candidate.recv_spec,
                    "You have two handlers with the same recv_spec"
                );
            }
        }

        self.handlers.push(Arc::clone(&candidate));
        candidate
    }

    /// Registered handler for an identity key.
    pub fn get(&self, send_spec: &str, recv_spec: &str) -> Option<&Arc<Handler>> {
        self.handlers
            .iter()
            .find(|h| h.identity() == (send_spec, recv_spec))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Handler>> {
        self.handlers.iter()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handler(send: &str, recv: &str) -> Arc<Handler> {
        Arc::new(Handler::new(send, "ident", recv, ""))
    }

    #[test]
    fn test_identical_identity_is_reused() {
        let mut registry = HandlerRegistry::new();

        let first = registry.get_or_create(handler("ipc://a", "ipc://b"));
        let second = registry.get_or_create(handler("ipc://a", "ipc://b"));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_partial_match_registers_new_entry() {
        let mut registry = HandlerRegistry::new();

        let a = registry.get_or_create(handler("ipc://a", "ipc://b"));
        let shared_send = registry.get_or_create(handler("ipc://a", "ipc://c"));
        let shared_recv = registry.get_or_create(handler("ipc://x", "ipc://b"));

        assert!(!Arc::ptr_eq(&a, &shared_send));
        assert!(!Arc::ptr_eq(&a, &shared_recv));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_full_match_after_partial_matches() {
        let mut registry = HandlerRegistry::new();

        registry.get_or_create(handler("ipc://a", "ipc://c"));
        let target = registry.get_or_create(handler("ipc://a", "ipc://b"));
        let again = registry.get_or_create(handler("ipc://a", "ipc://b"));

        assert!(Arc::ptr_eq(&target, &again));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_by_identity() {
        let mut registry = HandlerRegistry::new();
        let stored = registry.get_or_create(handler("tcp://127.0.0.1:9997", "tcp://127.0.0.1:9996"));

        let found = registry.get("tcp://127.0.0.1:9997", "tcp://127.0.0.1:9996").unwrap();
        assert!(Arc::ptr_eq(found, &stored));
        assert!(registry.get("tcp://127.0.0.1:9997", "other").is_none());
    }
}
