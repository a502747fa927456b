//! Host JSON config editing
//!
//! `hooks.json` and `settings.json` are JSON objects owned by the host
//! application. We only touch the keys we register; everything else is
//! carried through untouched and in its original order.

use crate::errors::{AppError, AppResult, IoResultExt};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const NOTIFICATION_KEY: &str = "notification";
pub const STOP_KEY: &str = "stop";

/// In-memory copy of a host JSON config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonConfig {
    entries: Map<String, Value>,
    /// Set when an existing file could not be parsed and was treated as empty
    pub warning: Option<String>,
}

impl JsonConfig {
    pub fn from_entries(entries: Map<String, Value>) -> Self {
        Self {
            entries,
            warning: None,
        }
    }

    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Point both hooks.json keys at the given scripts, keeping all other keys
    pub fn register(&mut self, notification: &Path, stop: &Path) {
        self.entries.insert(
            NOTIFICATION_KEY.to_string(),
            Value::String(notification.display().to_string()),
        );
        self.entries.insert(
            STOP_KEY.to_string(),
            Value::String(stop.display().to_string()),
        );
    }

    /// Drop both hook keys; true when at least one was present
    pub fn unregister(&mut self) -> bool {
        let notification = self.entries.shift_remove(NOTIFICATION_KEY).is_some();
        let stop = self.entries.shift_remove(STOP_KEY).is_some();
        notification || stop
    }

    /// Pretty JSON with two-space indentation, no trailing newline
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

/// Reads and writes one JSON config file at a fixed path
pub struct JsonConfigEditor {
    path: PathBuf,
}

impl JsonConfigEditor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the file; missing or unparseable content yields an empty config
    pub fn load(&self) -> AppResult<JsonConfig> {
        if !self.path.exists() {
            debug!("{} does not exist, starting empty", self.path.display());
            return Ok(JsonConfig::default());
        }

        let content =
            fs::read_to_string(&self.path).in_file_operation(&self.path, "read config file")?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(JsonConfig::from_entries(entries)),
            Ok(other) => {
                let message = format!("expected a JSON object, found {}", json_kind(&other));
                warn!("Could not use existing {}: {}", self.path.display(), message);
                Ok(JsonConfig {
                    entries: Map::new(),
                    warning: Some(message),
                })
            }
            Err(e) => {
                warn!("Could not parse existing {}: {}", self.path.display(), e);
                Ok(JsonConfig {
                    entries: Map::new(),
                    warning: Some(e.to_string()),
                })
            }
        }
    }

    /// Write the whole config back, creating the parent directory if needed
    pub fn save(&self, config: &JsonConfig) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::io_with_source(parent, "create config directory", e))?;
            }
        }
        fs::write(&self.path, config.to_json()?).in_file_operation(&self.path, "write config file")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
