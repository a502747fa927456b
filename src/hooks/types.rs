//! Type definitions for hooks processing
//!
//! Data structures passed between the stages of the hook pipeline: the raw
//! event input, the classification result and the processed notification.

use crate::notify::{NotificationRequest, Sound};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle events the host application reports to us
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HookEvent {
    Notification,
    Stop,
}

impl HookEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            HookEvent::Notification => "notification",
            HookEvent::Stop => "stop",
        }
    }

    /// Name used for this hook's script and debug log file
    pub fn component(&self) -> &'static str {
        match self {
            HookEvent::Notification => "notification-hook",
            HookEvent::Stop => "stop-hook",
        }
    }

    /// Defaults applied to fields missing from a JSON payload
    pub fn json_defaults(&self) -> FieldDefaults {
        match self {
            HookEvent::Notification => FieldDefaults {
                title: "Claude Code",
                message: "",
            },
            HookEvent::Stop => FieldDefaults {
                title: "Claude Code Session",
                message: "Session Stopped",
            },
        }
    }

    /// Defaults applied to missing positional arguments
    pub fn arg_defaults(&self) -> FieldDefaults {
        match self {
            HookEvent::Notification => FieldDefaults {
                title: "",
                message: "",
            },
            HookEvent::Stop => FieldDefaults {
                title: "Claude Code",
                message: "Stop Event",
            },
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDefaults {
    pub title: &'static str,
    pub message: &'static str,
}

/// Where the hook input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSource {
    Json,
    Args,
}

/// Positional arguments given to a hook invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookArgs {
    pub title: Option<String>,
    pub message: Option<String>,
    pub level: Option<String>,
}

/// Normalized hook input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookInput {
    pub event: HookEvent,
    pub title: String,
    pub message: String,
    pub level: String,
    pub source: InputSource,
}

impl HookInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.message.is_empty()
    }
}

/// Notification category chosen by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Error,
    Warning,
    Success,
    Progress,
    Info,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Success => "success",
            Category::Progress => "progress",
            Category::Info => "info",
        }
    }

    pub fn sound(&self) -> Sound {
        match self {
            Category::Error => Sound::Error,
            Category::Warning => Sound::Warning,
            Category::Success => Sound::Success,
            Category::Progress => Sound::Progress,
            Category::Info => Sound::Info,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Error => "🚨",
            Category::Warning => "⚠️",
            Category::Success => "✅",
            Category::Progress => "⏳",
            Category::Info => "💡",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hook event turned into a dispatchable request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedNotification {
    pub event: HookEvent,
    /// `None` for events that are not classified (stop)
    pub category: Option<Category>,
    pub request: NotificationRequest,
}

/// What the pipeline decided to do with an event
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    Skipped(SkipReason),
    Dispatch(ProcessedNotification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Neither title nor message present
    NoData,
    /// Title or message blank
    Blank,
    /// Content matched a skip pattern
    Filtered(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoData => f.write_str("no notification data"),
            SkipReason::Blank => f.write_str("title or message is blank"),
            SkipReason::Filtered(pattern) => write!(f, "matched skip pattern '{pattern}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sounds_and_emoji() {
        assert_eq!(Category::Success.sound(), Sound::Success);
        assert_eq!(Category::Info.sound(), Sound::Info);
        assert_eq!(Category::Error.emoji(), "🚨");
        assert_eq!(Category::Info.emoji(), "💡");
    }

    #[test]
    fn test_event_defaults() {
        assert_eq!(HookEvent::Notification.json_defaults().title, "Claude Code");
        assert_eq!(HookEvent::Stop.json_defaults().message, "Session Stopped");
        assert_eq!(HookEvent::Stop.arg_defaults().title, "Claude Code");
        assert_eq!(HookEvent::Notification.arg_defaults().title, "");
    }

    #[test]
    fn test_input_is_empty() {
        let input = HookInput {
            event: HookEvent::Notification,
            title: String::new(),
            message: String::new(),
            level: "info".to_string(),
            source: InputSource::Args,
        };
        assert!(input.is_empty());
    }
}
