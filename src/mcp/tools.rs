//! Notification tools exposed over MCP
//!
//! Each tool turns its arguments into a [`NotificationRequest`] and hands it
//! to the [`Dispatcher`]. Every outcome, including bad arguments and failed
//! dispatches, comes back as a [`ToolResult`].

use super::protocol::ToolResult;
use crate::errors::{AppError, AppResult};
use crate::notify::request::DEFAULT_TIMEOUT_SECS;
use crate::notify::{Dispatcher, NotificationRequest, Sound};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

pub const SEND_NOTIFICATION: &str = "send_notification";
pub const LIST_SOUNDS: &str = "list_notification_sounds";
pub const TASK_COMPLETE: &str = "send_task_complete_notification";
pub const ERROR: &str = "send_error_notification";
pub const PROGRESS: &str = "send_progress_notification";
pub const ACTION_NEEDED: &str = "send_user_action_needed_notification";
pub const AUTO_NOTIFY: &str = "auto_notify_if_appropriate";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SendNotificationArgs {
    title: String,
    message: String,
    sound: Option<Sound>,
    subtitle: Option<String>,
    timeout: Option<f64>,
    open: Option<String>,
    #[serde(default)]
    wait: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TaskCompleteArgs {
    task: String,
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ErrorArgs {
    error: String,
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProgressArgs {
    status: String,
    details: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActionNeededArgs {
    action_needed: String,
    context: Option<String>,
    #[serde(default)]
    urgency: Urgency,
    timeout: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AutoNotifyArgs {
    context: String,
    #[serde(default)]
    todos_completed: bool,
    #[serde(default)]
    error_occurred: bool,
    #[serde(default)]
    permission_required: bool,
    error_details: Option<String>,
    task_summary: Option<String>,
}

/// How pressing a user action is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }

    pub fn sound(&self) -> Sound {
        match self {
            Urgency::Low => Sound::Info,
            Urgency::Medium => Sound::Reminder,
            Urgency::High => Sound::Warning,
            Urgency::Critical => Sound::Error,
        }
    }

    /// Whether the notification blocks for its timeout
    pub fn waits(&self) -> bool {
        matches!(self, Urgency::High | Urgency::Critical)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Urgency::Low | Urgency::Medium => "🔔 Action Needed",
            Urgency::High => "⚠️ Action Required",
            Urgency::Critical => "🚨 Urgent Action Required",
        }
    }
}

/// Tool descriptors returned by `tools/list`
pub fn tool_definitions() -> Vec<Value> {
    let sounds: Vec<&str> = Sound::ALL.iter().map(Sound::as_str).collect();

    vec![
        json!({
            "name": SEND_NOTIFICATION,
            "description": concat!(
                "Send a desktop notification with customizable sound ",
                "for different use cases"
            ),
            "inputSchema": {
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "The notification title",
                        "maxLength": 100
                    },
                    "message": {
                        "type": "string",
                        "description": "The notification message content",
                        "maxLength": 500
                    },
                    "sound": {
                        "type": "string",
                        "enum": sounds,
                        "description": concat!(
                            "Sound type for the notification context: ",
                            "success (task completion), info (status updates), ",
                            "warning (attention needed), error (failures), ",
                            "progress (ongoing work), reminder (prompts), ",
                            "default (system sound), silent (no sound)"
                        ),
                        "default": "default"
                    },
                    "subtitle": {
                        "type": "string",
                        "description": "Optional subtitle for the notification",
                        "maxLength": 100
                    },
                    "timeout": {
                        "type": "number",
                        "description": "Timeout in seconds",
                        "minimum": 1,
                        "maximum": 60,
                        "default": DEFAULT_TIMEOUT_SECS
                    },
                    "open": {
                        "type": "string",
                        "description": "URL or file path to open when notification is clicked"
                    },
                    "wait": {
                        "type": "boolean",
                        "description": "Whether to wait for user interaction",
                        "default": false
                    }
                },
                "required": ["title", "message"],
                "additionalProperties": false
            }
        }),
        json!({
            "name": LIST_SOUNDS,
            "description": "List available notification sounds and their intended use cases",
            "inputSchema": {"type": "object", "properties": {}, "additionalProperties": false}
        }),
        json!({
            "name": TASK_COMPLETE,
            "description": "Send a task completion notification with success sound",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "task": {
                        "type": "string",
                        "description": "Description of the completed task",
                        "maxLength": 200
                    },
                    "details": {
                        "type": "string",
                        "description": "Optional additional details about the completion",
                        "maxLength": 300
                    }
                },
                "required": ["task"],
                "additionalProperties": false
            }
        }),
        json!({
            "name": ERROR,
            "description": "Send an error notification with error sound",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "error": {
                        "type": "string",
                        "description": "Description of the error",
                        "maxLength": 200
                    },
                    "details": {
                        "type": "string",
                        "description": "Optional additional error details",
                        "maxLength": 300
                    }
                },
                "required": ["error"],
                "additionalProperties": false
            }
        }),
        json!({
            "name": PROGRESS,
            "description": "Send a progress update notification with progress sound",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "description": "Current progress status",
                        "maxLength": 200
                    },
                    "details": {
                        "type": "string",
                        "description": "Optional progress details",
                        "maxLength": 300
                    }
                },
                "required": ["status"],
                "additionalProperties": false
            }
        }),
        json!({
            "name": ACTION_NEEDED,
            "description": concat!(
                "Notify the user that their input or approval is needed; ",
                "high and critical urgency wait for interaction"
            ),
            "inputSchema": {
                "type": "object",
                "properties": {
                    "action_needed": {
                        "type": "string",
                        "description": "What the user needs to do",
                        "maxLength": 200
                    },
                    "context": {
                        "type": "string",
                        "description": "Optional context shown as the subtitle",
                        "maxLength": 300
                    },
                    "urgency": {
                        "type": "string",
                        "enum": ["low", "medium", "high", "critical"],
                        "description": concat!(
                            "low (info sound), medium (reminder sound), ",
                            "high (warning sound, waits), critical (error sound, waits)"
                        ),
                        "default": "medium"
                    },
                    "timeout": {
                        "type": "number",
                        "description": "Timeout in seconds",
                        "minimum": 1,
                        "maximum": 60,
                        "default": DEFAULT_TIMEOUT_SECS
                    }
                },
                "required": ["action_needed"],
                "additionalProperties": false
            }
        }),
        json!({
            "name": AUTO_NOTIFY,
            "description": concat!(
                "Send the most relevant notification for the current situation: ",
                "errors first, then required permissions, then completed todos"
            ),
            "inputSchema": {
                "type": "object",
                "properties": {
                    "context": {"type": "string", "description": "What just happened"},
                    "todos_completed": {
                        "type": "boolean",
                        "description": "All todo items are finished",
                        "default": false
                    },
                    "error_occurred": {
                        "type": "boolean",
                        "description": "An error needs the user's attention",
                        "default": false
                    },
                    "permission_required": {
                        "type": "boolean",
                        "description": "A permission prompt is waiting",
                        "default": false
                    },
                    "error_details": {
                        "type": "string",
                        "description": "Error description used instead of the context"
                    },
                    "task_summary": {
                        "type": "string",
                        "description": "Task summary used instead of the context"
                    }
                },
                "required": ["context"],
                "additionalProperties": false
            }
        }),
    ]
}

fn parse_args<T: DeserializeOwned>(arguments: Value) -> AppResult<T> {
    let arguments = if arguments.is_null() {
        json!({})
    } else {
        arguments
    };
    serde_json::from_value(arguments)
        .map_err(|e| AppError::invalid_argument("arguments", e.to_string()))
}

/// Seconds from a JSON number, clamped later by the dispatcher
fn timeout_secs(timeout: Option<f64>) -> Option<u64> {
    timeout
        .filter(|t| t.is_finite())
        .map(|t| t.max(0.0).round() as u64)
}

/// Routes `tools/call` requests to their handlers
#[derive(Clone)]
pub struct ToolRouter {
    dispatcher: Dispatcher,
}

impl ToolRouter {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Run a tool; never fails at the protocol level
    pub async fn call(&self, name: &str, arguments: Value) -> ToolResult {
        debug!("Calling tool {}", name);
        match self.try_call(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                ToolResult::error(format!("Error: {e}"))
            }
        }
    }

    async fn try_call(&self, name: &str, arguments: Value) -> AppResult<ToolResult> {
        let result = match name {
            SEND_NOTIFICATION => self.send_notification(parse_args(arguments)?).await,
            LIST_SOUNDS => ToolResult::text(Sound::catalog()),
            TASK_COMPLETE => {
                let args: TaskCompleteArgs = parse_args(arguments)?;
                self.task_complete(args.task, args.details).await
            }
            ERROR => {
                let args: ErrorArgs = parse_args(arguments)?;
                self.error(args.error, args.details).await
            }
            PROGRESS => {
                let args: ProgressArgs = parse_args(arguments)?;
                self.progress(args.status, args.details).await
            }
            ACTION_NEEDED => {
                let args: ActionNeededArgs = parse_args(arguments)?;
                self.action_needed(args.action_needed, args.context, args.urgency, args.timeout)
                    .await
            }
            AUTO_NOTIFY => self.auto_notify(parse_args(arguments)?).await,
            _ => {
                return Err(AppError::UnknownTool {
                    name: name.to_string(),
                })
            }
        };
        Ok(result)
    }

    /// Dispatch and render the success text or a failure for `kind`
    async fn deliver(
        &self,
        request: NotificationRequest,
        kind: &str,
        success: String,
    ) -> ToolResult {
        match self.dispatcher.dispatch(request).await {
            Ok(report) => {
                debug!("Dispatched via {} (audio: {:?})", report.backend, report.audio);
                if let Some(e) = report.open_error {
                    warn!("Failed to open notification target: {}", e);
                }
                ToolResult::text(success)
            }
            Err(e) => {
                warn!("Dispatch failed: {}", e);
                let kind = if kind.is_empty() {
                    String::new()
                } else {
                    format!("{kind} ")
                };
                ToolResult::error(format!("❌ Failed to send {kind}notification: {e}"))
            }
        }
    }

    async fn send_notification(&self, args: SendNotificationArgs) -> ToolResult {
        let sound = args
            .sound
            .unwrap_or(self.dispatcher.settings().default_sound);
        let success = format!(
            "✅ Notification sent: \"{}\" with {} sound",
            args.title, sound
        );
        let request = NotificationRequest::new(args.title, args.message)
            .with_sound(sound)
            .with_subtitle(args.subtitle)
            .with_timeout(timeout_secs(args.timeout))
            .with_open(args.open)
            .with_wait(args.wait);
        self.deliver(request, "", success).await
    }

    async fn task_complete(&self, task: String, details: Option<String>) -> ToolResult {
        let success = format!("✅ Task completion notification sent: \"{task}\"");
        let request = NotificationRequest::new("✅ Task Complete", task)
            .with_subtitle(details)
            .with_sound(Sound::Success);
        self.deliver(request, "task completion", success).await
    }

    async fn error(&self, error: String, details: Option<String>) -> ToolResult {
        let success = format!("❌ Error notification sent: \"{error}\"");
        let request = NotificationRequest::new("❌ Error Occurred", error)
            .with_subtitle(details)
            .with_sound(Sound::Error);
        self.deliver(request, "error", success).await
    }

    async fn progress(&self, status: String, details: Option<String>) -> ToolResult {
        let success = format!("⏳ Progress notification sent: \"{status}\"");
        let request = NotificationRequest::new("⏳ Progress Update", status)
            .with_subtitle(details)
            .with_sound(Sound::Progress);
        self.deliver(request, "progress", success).await
    }

    async fn action_needed(
        &self,
        action: String,
        context: Option<String>,
        urgency: Urgency,
        timeout: Option<f64>,
    ) -> ToolResult {
        let success = format!(
            "🔔 Action-needed notification sent ({}): \"{}\"",
            urgency.as_str(),
            action
        );
        let timeout = timeout_secs(timeout).unwrap_or(DEFAULT_TIMEOUT_SECS);
        let request = NotificationRequest::new(urgency.title(), action)
            .with_subtitle(context)
            .with_sound(urgency.sound())
            .with_timeout(Some(timeout))
            .with_wait(urgency.waits());
        self.deliver(request, "action-needed", success).await
    }

    async fn auto_notify(&self, args: AutoNotifyArgs) -> ToolResult {
        if args.error_occurred {
            return match args.error_details {
                Some(details) => self.error(details, Some(args.context)).await,
                None => self.error(args.context, None).await,
            };
        }

        if args.permission_required {
            return self
                .action_needed(args.context, None, Urgency::High, None)
                .await;
        }

        if args.todos_completed {
            return match args.task_summary {
                Some(summary) => self.task_complete(summary, Some(args.context)).await,
                None => self.task_complete(args.context, None).await,
            };
        }

        ToolResult::text(format!("No notification needed: {}", args.context))
    }
}
