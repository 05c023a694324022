//! Host compilation.

use crate::compiler::routes::compile_routes;
use crate::config::{ConfigRecord, ConfigResult};
use crate::routing::{Host, Server};

/// Build one host from its record, compile its routes and add it to
/// `server`. Returns the host's index in the server.
///
/// The host is only added once all of its routes compiled.
pub fn compile_host(record: &ConfigRecord<'_>, server: &mut Server) -> ConfigResult<usize> {
    let name = record.str("name")?;
    let matching = record.str("matching")?;
    let routes = record.table("routes")?;

    let mut host = Host::new(name, matching);
    let route_count = compile_routes(&routes, &mut host, server.handlers_mut())?;

    let index = server.add_host(host)?;
    if name == server.default_hostname {
        server.set_default_host(index);
    }

    tracing::info!(host = name, matching, routes = route_count, "Loaded host");
    Ok(index)
}

/// Compile every entry of the record's `hosts` array, in order.
pub fn compile_hosts(record: &ConfigRecord<'_>, server: &mut Server) -> ConfigResult<usize> {
    let mut loaded = 0;
    for host in record.records("hosts")? {
        compile_host(&host?, server)?;
        loaded += 1;
    }

    tracing::info!(server = %server.uuid, hosts = loaded, "Loaded hosts for server");
    Ok(loaded)
}
