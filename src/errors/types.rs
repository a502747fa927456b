//! Error types for the notification hooks, dispatcher, tool server and installer
//!
//! Variants are grouped by the component that raises them so callers can
//! decide per category whether a failure is swallowed or surfaced.

use std::path::PathBuf;
use thiserror::Error;

/// Underlying cause carried by most variants
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // Settings and paths
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Home directory could not be determined")]
    HomeDirNotFound,

    // Dispatcher
    #[error("Notification dispatch via {backend} failed: {reason}")]
    Dispatch {
        backend: &'static str,
        reason: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Invalid notification: {0}")]
    InvalidNotification(String),

    #[error("Could not run {command}")]
    ProcessExecution {
        command: String,
        #[source]
        source: BoxError,
    },

    #[error("Command '{command}' exited with status {status}")]
    ProcessStatus { command: String, status: String },

    // Tool server
    #[error("Unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },

    // Installer pre-flight
    #[error("This package is designed for macOS only (running on {platform})")]
    UnsupportedPlatform { platform: String },

    #[error("{cli} CLI not found. Please install Claude Code first.")]
    HostCliMissing { cli: String },

    #[error("Failed to {operation} '{}'", path.display())]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn dispatch(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::Dispatch {
            backend,
            reason: reason.into(),
            source: None,
        }
    }

    /// Dispatch failure caused by a lower-level error, usually a subprocess
    pub fn dispatch_with_source(
        backend: &'static str,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Dispatch {
            backend,
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn process_with_source(
        command: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ProcessExecution {
            command: command.into(),
            source: Box::new(source),
        }
    }

    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn io_with_source(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Short component name for log fields
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config { .. } | Self::HomeDirNotFound => "config",
            Self::Dispatch { .. }
            | Self::InvalidNotification(_)
            | Self::ProcessExecution { .. }
            | Self::ProcessStatus { .. } => "dispatch",
            Self::UnknownTool { .. } | Self::InvalidArgument { .. } => "tool",
            Self::UnsupportedPlatform { .. } | Self::HostCliMissing { .. } => "preflight",
            Self::Io { .. } => "io",
            Self::Json(_) => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AppError::dispatch("osascript", "exit status 1");
        assert_eq!(
            err.to_string(),
            "Notification dispatch via osascript failed: exit status 1"
        );

        let err = AppError::io_with_source(
            "/tmp/hooks.json",
            "write hooks config",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to write hooks config '/tmp/hooks.json'");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(AppError::config("bad").category(), "config");
        assert_eq!(AppError::UnknownTool { name: "x".into() }.category(), "tool");
        assert_eq!(
            AppError::HostCliMissing { cli: "Claude Code".into() }.category(),
            "preflight"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        fn parse() -> AppResult<serde_json::Value> {
            Ok(serde_json::from_str("{not json")?)
        }

        let err = parse().unwrap_err();
        assert_eq!(err.category(), "json");
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }
}
