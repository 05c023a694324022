//! Process-wide settings and MIME type maps.
//!
//! # Responsibilities
//! - Hold `settings` and `mimetypes` after they are loaded
//! - Reject duplicate keys on insert
//! - Answer typed setting lookups and extension-based MIME lookups
//!
//! # Design Decisions
//! - Built once at startup and passed by reference; no global state
//! - MIME extensions are stored reversed so a path's extension is found by
//!   walking the reversed path forward and keeping the longest match

use crate::adt::Tst;
use crate::config::{ConfigError, ConfigResult};

/// Global settings, e.g. `limits.buffer_size`.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    tree: Tst<String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a setting; fails if the key is already set.
    pub fn try_insert(&mut self, key: &str, value: impl Into<String>) -> ConfigResult<()> {
        if self.tree.contains(key) {
            return Err(ConfigError::DuplicateKey {
                map: "settings",
                key: key.to_string(),
            });
        }
        self.tree.insert(key, value.into());
        Ok(())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.tree.search(key).map(String::as_str)
    }

    /// Integer setting, or `default` when unset or not a number.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.tree.search(key) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(key, value = %raw, default, "Setting is not an integer, using default");
                default
            }),
            None => default,
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Content types keyed by file extension (`.html` → `text/html`).
#[derive(Debug, Clone, Default)]
pub struct MimeTypes {
    tree: Tst<String>,
}

impl MimeTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping; fails if the extension is already mapped.
    pub fn try_insert(&mut self, ext: &str, content_type: impl Into<String>) -> ConfigResult<()> {
        let key = reverse(ext);
        if self.tree.contains(&key) {
            return Err(ConfigError::DuplicateKey {
                map: "mimetypes",
                key: ext.to_string(),
            });
        }
        self.tree.insert(&key, content_type.into());
        Ok(())
    }

    /// Content type for an exact extension.
    pub fn get(&self, ext: &str) -> Option<&str> {
        self.tree.search(&reverse(ext)).map(String::as_str)
    }

    /// Content type for a path, chosen by its longest known suffix.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.tree.longest_prefix(&reverse(path)).map(String::as_str)
    }

    pub fn lookup_or<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
        self.lookup(path).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Both global maps, as loaded from one document.
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub settings: Settings,
    pub mimetypes: MimeTypes,
}

fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_lookup() {
        let mut settings = Settings::new();
        settings.try_insert("limits.buffer_size", "2048").unwrap();
        settings.try_insert("upload.temp_store", "/tmp/upload.XXXXXX").unwrap();

        assert_eq!(settings.get_int("limits.buffer_size", 4096), 2048);
        assert_eq!(settings.get_int("limits.missing", 4096), 4096);
        assert_eq!(settings.get_int("upload.temp_store", 7), 7);
        assert_eq!(settings.get_str("upload.temp_store"), Some("/tmp/upload.XXXXXX"));
        assert_eq!(settings.len(), 2);
    }

    #[test]
    fn test_settings_duplicate_key() {
        let mut settings = Settings::new();
        settings.try_insert("limits.buffer_size", "2048").unwrap();

        let err = settings.try_insert("limits.buffer_size", "1").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateKey { map: "settings", .. }));
        assert_eq!(settings.get_str("limits.buffer_size"), Some("2048"));
    }

    #[test]
    fn test_mime_lookup_by_suffix() {
        let mut mime = MimeTypes::new();
        mime.try_insert(".html", "text/html").unwrap();
        mime.try_insert(".gz", "application/x-gzip").unwrap();
        mime.try_insert(".tar.gz", "application/x-tar-gz").unwrap();

        assert_eq!(mime.lookup("/var/www/index.html"), Some("text/html"));
        assert_eq!(mime.lookup("backup.tar.gz"), Some("application/x-tar-gz"));
        assert_eq!(mime.lookup("access.log.gz"), Some("application/x-gzip"));
        assert_eq!(mime.lookup("README"), None);
        assert_eq!(mime.lookup_or("README", "text/plain"), "text/plain");
        assert_eq!(mime.get(".html"), Some("text/html"));
    }

    #[test]
    fn test_mime_duplicate_key() {
        let mut mime = MimeTypes::new();
        mime.try_insert(".css", "text/css").unwrap();

        let err = mime.try_insert(".css", "text/plain").unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateKey { map: "mimetypes", ref key } if key == ".css"));
    }
}
