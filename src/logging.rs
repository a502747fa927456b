//! Tracing setup
//!
//! Console output always goes to stderr; stdout is reserved for hook
//! fallbacks and the MCP protocol. Debug mode adds an append-only log file
//! per component under the data directory.

use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// What to log and where
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub verbose: bool,
    /// Append-only log file, set in debug mode
    pub file: Option<PathBuf>,
    /// Filter directive for the file layer
    pub file_level: String,
}

/// Local RFC 3339 timestamps for the log file
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(w, "{}", now.to_rfc3339_opts(chrono::SecondsFormat::Millis, false))
    }
}

fn console_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    EnvFilter::from_default_env().add_directive(level.into())
}

fn file_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Split a log file path into the directory and file name the appender wants
fn appender_target(file: &Path) -> Option<(PathBuf, PathBuf)> {
    let name = file.file_name()?;
    let dir = file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    Some((dir.to_path_buf(), PathBuf::from(name)))
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop and must be held for
/// the life of the process. Calling this twice is harmless; the second call
/// leaves the first subscriber in place.
pub fn init(options: &LogOptions) -> Option<WorkerGuard> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter(options.verbose));

    let mut file_error = None;
    let (file_layer, guard) = match options.file.as_deref().and_then(appender_target) {
        Some((dir, name)) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::never(dir, name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_timer(LocalTime)
                    .with_filter(file_filter(&options.file_level));
                (Some(layer), Some(guard))
            }
            Err(e) => {
                file_error = Some(format!("{}: {}", dir.display(), e));
                (None, None)
            }
        },
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    if let Some(error) = file_error {
        tracing::warn!("Debug logging disabled, could not create log directory {}", error);
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appender_target() {
        let (dir, name) = appender_target(Path::new("/tmp/cat-ccnotify/stop-hook.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/cat-ccnotify"));
        assert_eq!(name, PathBuf::from("stop-hook.log"));

        let (dir, _) = appender_target(Path::new("plain.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert!(appender_target(Path::new("/")).is_none());
    }

    #[test]
    fn test_invalid_file_level_falls_back() {
        // Must not panic on a bad directive from the settings file
        let _ = file_filter("not a [valid directive");
    }
}
