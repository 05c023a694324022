//! Shared fixtures for the integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Path of the example configuration shipped with the crate.
pub fn example_config() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config.example.toml")
}

/// A `[[servers]]` entry named `name` with the given hosts appended.
pub fn server_doc(name: &str, hosts: &str) -> String {
    format!(
        r#"
[[servers]]
name = "{name}"
uuid = "9e1b4a1c-5b0a-4d7e-8c55-0d5c3a6f2b11"
default_host = "h1"
bind_addr = "0.0.0.0"
port = 6767
access_log = "/logs/access.log"
error_log = "/logs/error.log"
pid_file = "/run/server.pid"
use_ssl = 0
{hosts}
"#
    )
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that records log output, returning both.
#[allow(dead_code)]
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&capture.0.lock().unwrap()).into_owned();
    (result, logs)
}
