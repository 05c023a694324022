//! Server compilation: the entry point of the compiler.

use uuid::Uuid;

use crate::compiler::hosts::compile_hosts;
use crate::config::{ConfigError, ConfigRecord, ConfigResult, ConfigSource};
use crate::routing::Server;

/// Compile the server called `name` from a configuration document.
pub fn compile_server(source: &ConfigSource, name: &str) -> ConfigResult<Server> {
    compile(&source.root(), name)
}

/// Compile the server called `name` from the `servers` array of `root`.
///
/// All or nothing: if any host fails the partially built server is
/// dropped and the error returned.
pub fn compile(root: &ConfigRecord<'_>, name: &str) -> ConfigResult<Server> {
    let record = find_server(root, name)?;

    let uuid = record.str("uuid")?;
    let default_host = record.str("default_host")?;
    let bind_addr = record.str("bind_addr")?;
    let port = record.int("port")?;
    let access_log = record.str("access_log")?;
    let error_log = record.str("error_log")?;
    let pid_file = record.str("pid_file")?;
    let use_ssl = record.flag("use_ssl")?;

    if Uuid::parse_str(uuid).is_err() {
        tracing::warn!(server = name, uuid, "Server uuid is not a valid UUID");
    }

    let mut server = Server::new(
        uuid,
        default_host,
        bind_addr,
        port,
        access_log,
        error_log,
        pid_file,
        use_ssl,
    );

    compile_hosts(&record, &mut server)?;

    if server.default_host().is_none() {
        tracing::warn!(server = name, default_host, "No host matches the default host name");
    }

    tracing::info!(
        server = name,
        uuid,
        bind_addr,
        port,
        hosts = server.hosts().len(),
        handlers = server.handlers().len(),
        "Server compiled"
    );
    Ok(server)
}

/// First entry of `servers` whose name is `name`.
///
/// Entries before the match must be tables with a string `name`.
pub fn find_server<'a>(root: &ConfigRecord<'a>, name: &str) -> ConfigResult<ConfigRecord<'a>> {
    for entry in root.records("servers")? {
        let entry = entry?;
        if entry.str("name")? == name {
            return Ok(entry.with_context(format!("server '{}'", name)));
        }
    }

    Err(ConfigError::NotFound(name.to_string()))
}
