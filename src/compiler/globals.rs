//! Loading of the `settings` and `mimetypes` tables.

use toml::Value;

use crate::config::{ConfigError, ConfigRecord, ConfigResult, ConfigSource};
use crate::globals::{Globals, MimeTypes, Settings};

/// Load both global maps from a document.
pub fn load_globals(source: &ConfigSource) -> ConfigResult<Globals> {
    let root = source.root();
    let mut globals = Globals::default();

    load_settings(&root, &mut globals.settings)?;
    load_mimetypes(&root, &mut globals.mimetypes)?;
    Ok(globals)
}

/// Add every entry of the `settings` table to `settings`.
///
/// Fails on the first key that is already present. Returns the number of
/// entries added.
pub fn load_settings(root: &ConfigRecord<'_>, settings: &mut Settings) -> ConfigResult<usize> {
    let table = root.table("settings")?;
    let mut loaded = 0;

    for (key, value) in table.entries() {
        let value = scalar(value).ok_or_else(|| ConfigError::missing(table.context(), key))?;
        settings.try_insert(key, value)?;
        loaded += 1;
    }

    tracing::info!(count = loaded, "Loaded settings");
    Ok(loaded)
}

/// Add every entry of the `mimetypes` table to `mimetypes`.
pub fn load_mimetypes(root: &ConfigRecord<'_>, mimetypes: &mut MimeTypes) -> ConfigResult<usize> {
    let table = root.table("mimetypes")?;
    let mut loaded = 0;

    for (ext, value) in table.entries() {
        let content_type = scalar(value).ok_or_else(|| ConfigError::missing(table.context(), ext))?;
        mimetypes.try_insert(ext, content_type)?;
        loaded += 1;
    }

    tracing::info!(count = loaded, "Loaded mimetypes");
    Ok(loaded)
}

// Scalars are stored in their string form; tables and arrays are rejected.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(n) => Some(n.to_string()),
        Value::Float(f) => Some(f.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_globals() {
        let source = ConfigSource::parse(r#"
[settings]
"limits.buffer_size" = 2048
"upload.temp_store" = "/tmp/upload.XXXXXX"
"control_port" = "ipc://run/control"

[mimetypes]
".html" = "text/html"
".css" = "text/css"
"#)
        .unwrap();

        let globals = load_globals(&source).unwrap();
        assert_eq!(globals.settings.len(), 3);
        assert_eq!(globals.settings.get_int("limits.buffer_size", 0), 2048);
        assert_eq!(globals.settings.get_str("control_port"), Some("ipc://run/control"));
        assert_eq!(globals.mimetypes.lookup("site/style.css"), Some("text/css"));
    }

    #[test]
    fn test_overlapping_second_load_fails() {
        let first = ConfigSource::parse(r#"
[settings]
"limits.buffer_size" = 2048
"#)
        .unwrap();
        let second = ConfigSource::parse(r#"
[settings]
"limits.content_length" = 20480
"limits.buffer_size" = 4096
"#)
        .unwrap();

        let mut settings = Settings::new();
        assert_eq!(load_settings(&first.root(), &mut settings).unwrap(), 1);

        let err = load_settings(&second.root(), &mut settings).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateKey { ref key, .. } if key == "limits.buffer_size"));
        assert_eq!(settings.get_int("limits.buffer_size", 0), 2048);
    }

    #[test]
    fn test_disjoint_loads_succeed() {
        let first = ConfigSource::parse("[mimetypes]\n\".txt\" = \"text/plain\"\n").unwrap();
        let second = ConfigSource::parse("[mimetypes]\n\".json\" = \"application/json\"\n").unwrap();

        let mut mimetypes = MimeTypes::new();
        load_mimetypes(&first.root(), &mut mimetypes).unwrap();
        load_mimetypes(&second.root(), &mut mimetypes).unwrap();

        assert_eq!(mimetypes.get(".txt"), Some("text/plain"));
        assert_eq!(mimetypes.get(".json"), Some("application/json"));
    }

    #[test]
    fn test_overlapping_mimetypes_fail() {
        let source = ConfigSource::parse("[mimetypes]\n\".txt\" = \"text/plain\"\n").unwrap();

        let mut mimetypes = MimeTypes::new();
        load_mimetypes(&source.root(), &mut mimetypes).unwrap();
        let err = load_mimetypes(&source.root(), &mut mimetypes).unwrap_err();

        assert!(matches!(err, ConfigError::DuplicateKey { map: "mimetypes", .. }));
    }

    #[test]
    fn test_nested_value_rejected() {
        let source = ConfigSource::parse(r#"
[settings.limits]
buffer_size = 2048
"#)
        .unwrap();

        let err = load_settings(&source.root(), &mut Settings::new()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { ref field, .. } if field == "limits"));
    }

    #[test]
    fn test_missing_table() {
        let source = ConfigSource::parse("[settings]\n").unwrap();
        let err = load_globals(&source).unwrap_err();

        assert!(matches!(err, ConfigError::MissingField { ref field, .. } if field == "mimetypes"));
    }
}
