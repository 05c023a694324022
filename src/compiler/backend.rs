//! Backend construction from route records.
//!
//! # Responsibilities
//! - Read the fields each backend type requires
//! - Build exactly one backend per record or fail with the missing field
//!
//! Handlers come out as fresh candidates; deduplication happens in the
//! route compiler through the server's registry.

use std::sync::Arc;

use crate::config::{ConfigRecord, ConfigResult};
use crate::routing::{Backend, BackendKind, Dir, Handler, HandlerProtocol, Proxy};

/// Protocol every compiled handler speaks.
pub const HANDLER_PROTOCOL: HandlerProtocol = HandlerProtocol::Tnet;

/// Build the backend a route record declares.
pub fn build(kind: BackendKind, record: &ConfigRecord<'_>) -> ConfigResult<Backend> {
    let backend = match kind {
        BackendKind::Dir => Backend::Dir(build_dir(record)?),
        BackendKind::Proxy => Backend::Proxy(build_proxy(record)?),
        BackendKind::Handler => Backend::Handler(Arc::new(build_handler(record)?)),
    };
    Ok(backend)
}

pub fn build_dir(record: &ConfigRecord<'_>) -> ConfigResult<Dir> {
    let dir = Dir::new(
        record.str("base")?,
        record.str("index_file")?,
        record.str("default_ctype")?,
        record.int("cache_ttl")?,
    );

    tracing::info!(
        route = record.context(),
        base = %dir.base,
        index_file = %dir.index_file,
        cache_ttl = dir.cache_ttl,
        "Loaded directory"
    );
    Ok(dir)
}

pub fn build_proxy(record: &ConfigRecord<'_>) -> ConfigResult<Proxy> {
    let proxy = Proxy::new(record.str("addr")?, record.int("port")?);

    if !proxy.port_in_range() {
        tracing::warn!(
            route = record.context(),
            port = proxy.port,
            "Proxy port is outside 1-65535, leaving it for the runtime to reject"
        );
    }

    tracing::info!(
        route = record.context(),
        addr = %proxy.addr,
        port = proxy.port,
        "Loaded proxy"
    );
    Ok(proxy)
}

pub fn build_handler(record: &ConfigRecord<'_>) -> ConfigResult<Handler> {
    let mut handler = Handler::new(
        record.str("send_spec")?,
        record.str("send_ident")?,
        record.str("recv_spec")?,
        record.str("recv_ident")?,
    );
    handler.raw = true;
    handler.protocol = HANDLER_PROTOCOL;

    tracing::info!(
        route = record.context(),
        send_spec = %handler.send_spec,
        send_ident = %handler.send_ident,
        recv_spec = %handler.recv_spec,
        recv_ident = %handler.recv_ident,
        "Loaded handler"
    );
    Ok(handler)
}
