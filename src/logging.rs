//! File-backed tracing. The terminal belongs to the UI, so nothing is
//! written to stdout or stderr once the subscriber is installed.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g. `worldtag=debug`.
pub const LOG_ENV: &str = "WORLDTAG_LOG";

/// Installs the global subscriber, appending to `path`.
///
/// `WORLDTAG_LOG` wins over `default_level`; an unparsable directive falls
/// back to `info`.
pub fn init_tracing(path: &Path, default_level: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!(path = %path.display(), version = env!("CARGO_PKG_VERSION"), "Logging started");
    Ok(())
}
