//! Route table compilation for one host.

use crate::compiler::backend;
use crate::config::{ConfigError, ConfigRecord, ConfigResult};
use crate::routing::{Backend, BackendKind, HandlerRegistry, Host};

/// Compile a host's `routes` table into its route table.
///
/// Handlers are passed through `registry` so routes naming the same
/// send/recv pair share one handler. Returns the number of routes loaded.
/// Any failure leaves the host unusable; the caller must discard it.
pub fn compile_routes(
    routes: &ConfigRecord<'_>,
    host: &mut Host,
    registry: &mut HandlerRegistry,
) -> ConfigResult<usize> {
    let mut loaded = 0;

    for (path, value) in routes.entries() {
        let record = ConfigRecord::from_value(value, format!("host '{}' route '{}'", host.name, path))
            .ok_or_else(|| ConfigError::missing(routes.context(), path))?;

        let type_name = record.str("type")?;
        let kind: BackendKind =
            type_name
                .parse()
                .map_err(|_| ConfigError::InvalidBackendType {
                    context: record.context().to_string(),
                    kind: type_name.to_string(),
                })?;

        let backend = match backend::build(kind, &record)? {
            Backend::Handler(candidate) => Backend::Handler(registry.get_or_create(candidate)),
            other => other,
        };

        host.add_backend(path, backend)?;

        tracing::info!(host = %host.name, path, kind = %kind, "Loaded route");
        loaded += 1;
    }

    Ok(loaded)
}
