//! Input adapter
//!
//! Turns whatever the host passed to a hook (a JSON document on stdin, or
//! positional arguments) into a [`HookInput`]. Never fails: unreadable or
//! unparseable input degrades to the argument fallback.

use super::types::{HookArgs, HookEvent, HookInput, InputSource};
use serde_json::Value;
use std::io::{IsTerminal, Read};
use tracing::debug;

const DEFAULT_LEVEL: &str = "info";

/// Read all of stdin, or nothing when stdin is an interactive terminal
pub fn read_stdin() -> String {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("stdin is a terminal, not reading hook payload");
        return String::new();
    }

    let mut buffer = String::new();
    if let Err(e) = stdin.read_to_string(&mut buffer) {
        debug!("Error reading stdin: {}", e);
        return String::new();
    }
    buffer
}

/// Text of a JSON scalar; numbers and booleans are written as JSON
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub struct InputAdapter {
    event: HookEvent,
}

impl InputAdapter {
    pub fn new(event: HookEvent) -> Self {
        Self { event }
    }

    /// Build the hook input from raw stdin text and the positional arguments
    pub fn adapt(&self, stdin: &str, args: &HookArgs) -> HookInput {
        debug!("Raw stdin input: {:?}", stdin);

        if stdin.trim().is_empty() {
            return self.from_args(args);
        }

        match serde_json::from_str::<Value>(stdin) {
            Ok(value) => self.from_json(&value),
            Err(e) => {
                debug!("stdin is not JSON ({}), using arguments", e);
                self.from_args(args)
            }
        }
    }

    fn from_json(&self, value: &Value) -> HookInput {
        let defaults = self.event.json_defaults();
        let field = |name: &str, default: &str| {
            value
                .get(name)
                .and_then(scalar_text)
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        HookInput {
            event: self.event,
            title: field("title", defaults.title),
            message: field("message", defaults.message),
            level: DEFAULT_LEVEL.to_string(),
            source: InputSource::Json,
        }
    }

    fn from_args(&self, args: &HookArgs) -> HookInput {
        let defaults = self.event.arg_defaults();
        let pick = |arg: &Option<String>, default: &str| {
            arg.as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        HookInput {
            event: self.event,
            title: pick(&args.title, defaults.title),
            message: pick(&args.message, defaults.message),
            level: pick(&args.level, DEFAULT_LEVEL),
            source: InputSource::Args,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(title: &str, message: &str) -> HookArgs {
        HookArgs {
            title: Some(title.to_string()),
            message: Some(message.to_string()),
            level: None,
        }
    }

    #[test]
    fn test_json_payload() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt(
            r#"{"title":"Build Success","message":"✅ All tests passed","extra":1}"#,
            &HookArgs::default(),
        );

        assert_eq!(input.title, "Build Success");
        assert_eq!(input.message, "✅ All tests passed");
        assert_eq!(input.level, "info");
        assert_eq!(input.source, InputSource::Json);
    }

    #[test]
    fn test_json_missing_fields_use_defaults() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt(r#"{"message":"hello"}"#, &HookArgs::default());
        assert_eq!(input.title, "Claude Code");

        let adapter = InputAdapter::new(HookEvent::Stop);
        let input = adapter.adapt(r#"{"title":""}"#, &HookArgs::default());
        assert_eq!(input.title, "Claude Code Session");
        assert_eq!(input.message, "Session Stopped");
    }

    #[test]
    fn test_json_scalars_are_stringified() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt(r#"{"title":42,"message":true}"#, &HookArgs::default());
        assert_eq!(input.title, "42");
        assert_eq!(input.message, "true");

        let input = adapter.adapt(
            r#"{"title":null,"message":{"text":"nested"}}"#,
            &HookArgs::default(),
        );
        assert_eq!(input.title, "Claude Code");
        assert_eq!(input.message, "");
    }

    #[test]
    fn test_json_non_object_uses_defaults() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt("[1, 2, 3]", &args("ignored", "ignored"));
        assert_eq!(input.title, "Claude Code");
        assert_eq!(input.message, "");
        assert_eq!(input.source, InputSource::Json);
    }

    #[test]
    fn test_malformed_stdin_falls_back_to_args() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt("not json {", &args("Deploy", "done"));

        assert_eq!(input.title, "Deploy");
        assert_eq!(input.message, "done");
        assert_eq!(input.source, InputSource::Args);
    }

    #[test]
    fn test_empty_stdin_falls_back_to_args() {
        let adapter = InputAdapter::new(HookEvent::Notification);
        let input = adapter.adapt(
            "  \n",
            &HookArgs {
                title: Some("T".to_string()),
                message: Some("M".to_string()),
                level: Some("warning".to_string()),
            },
        );
        assert_eq!(input.level, "warning");
        assert_eq!(input.source, InputSource::Args);
    }

    #[test]
    fn test_arg_defaults_per_event() {
        let input = InputAdapter::new(HookEvent::Notification).adapt("", &HookArgs::default());
        assert!(input.is_empty());
        assert_eq!(input.level, "info");

        let input = InputAdapter::new(HookEvent::Stop).adapt("", &HookArgs::default());
        assert_eq!(input.title, "Claude Code");
        assert_eq!(input.message, "Stop Event");
    }
}
