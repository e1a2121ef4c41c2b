use std::path::Path;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Names the log file; unset means no logging, so nothing can draw over
/// the terminal UI.
pub const LOG_ENV: &str = "INKBRO_LOG";

/// Start file logging if [`LOG_ENV`] is set.
///
/// Each process writes `{path}.{timestamp}.{pid}`. The filter comes from
/// `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };
    let unique_path = unique_log_path(Path::new(&log_path));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: failed to create log file: {}", unique_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn unique_log_path(base: &Path) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base.display(), timestamp, std::process::id())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_carries_pid() {
        let path = unique_log_path(Path::new("/tmp/inkbro.log"));
        assert!(path.starts_with("/tmp/inkbro.log."));
        assert!(path.ends_with(&format!(".{}", std::process::id())));
    }
}
