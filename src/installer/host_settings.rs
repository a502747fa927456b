//! Claude Code `settings.json` registration
//!
//! Adds the `ccnotify` MCP server under `mcpServers` and a catch-all
//! `Notification` hook under `hooks`, and removes them again. Existing
//! entries are never overwritten.

use super::config_editor::JsonConfig;
use serde_json::{json, Map, Value};
use std::path::Path;

pub const MCP_SERVERS_KEY: &str = "mcpServers";
pub const SERVER_NAME: &str = "ccnotify";
pub const HOOKS_KEY: &str = "hooks";
pub const NOTIFICATION_EVENT: &str = "Notification";

/// Marker used to recognize hook entries that run ccnotify
const COMMAND_MARKER: &str = "ccnotify";

/// Register `server` as the `ccnotify` MCP server; false when already present
pub fn add_mcp_server(config: &mut JsonConfig, server: &Path) -> bool {
    let Some(servers) = object_entry(config.entries_mut(), MCP_SERVERS_KEY) else {
        return false;
    };
    if servers.contains_key(SERVER_NAME) {
        return false;
    }
    servers.insert(
        SERVER_NAME.to_string(),
        json!({
            "command": server.display().to_string(),
            "args": [],
        }),
    );
    true
}

/// Append a `Notification` hook running `executable`; false when a ccnotify
/// hook is already configured
pub fn add_notification_hook(config: &mut JsonConfig, executable: &Path) -> bool {
    let Some(hooks) = object_entry(config.entries_mut(), HOOKS_KEY) else {
        return false;
    };
    if !hooks.get(NOTIFICATION_EVENT).is_some_and(Value::is_array) {
        hooks.insert(NOTIFICATION_EVENT.to_string(), Value::Array(Vec::new()));
    }
    let Some(matchers) = hooks
        .get_mut(NOTIFICATION_EVENT)
        .and_then(Value::as_array_mut)
    else {
        return false;
    };
    if matchers.iter().any(runs_ccnotify) {
        return false;
    }

    matchers.push(json!({
        "matcher": "*",
        "hooks": [{
            "type": "command",
            "command": format!("\"{}\" hook notification", executable.display()),
        }],
    }));
    true
}

/// Remove the `ccnotify` MCP server; containers left empty are dropped
pub fn remove_mcp_server(config: &mut JsonConfig) -> bool {
    let entries = config.entries_mut();
    let Some(Value::Object(servers)) = entries.get_mut(MCP_SERVERS_KEY) else {
        return false;
    };
    let removed = servers.shift_remove(SERVER_NAME).is_some();
    if servers.is_empty() {
        entries.shift_remove(MCP_SERVERS_KEY);
    }
    removed
}

/// Remove every `Notification` hook entry that runs ccnotify
pub fn remove_notification_hooks(config: &mut JsonConfig) -> bool {
    let entries = config.entries_mut();
    let Some(Value::Object(hooks)) = entries.get_mut(HOOKS_KEY) else {
        return false;
    };
    let Some(Value::Array(matchers)) = hooks.get_mut(NOTIFICATION_EVENT) else {
        return false;
    };

    let before = matchers.len();
    matchers.retain(|matcher| !runs_ccnotify(matcher));
    let removed = matchers.len() != before;

    if matchers.is_empty() {
        hooks.shift_remove(NOTIFICATION_EVENT);
    }
    if hooks.is_empty() {
        entries.shift_remove(HOOKS_KEY);
    }
    removed
}

/// The object stored under `key`, replacing a missing or non-object value
fn object_entry<'a>(
    entries: &'a mut Map<String, Value>,
    key: &str,
) -> Option<&'a mut Map<String, Value>> {
    if !entries.get(key).is_some_and(Value::is_object) {
        entries.insert(key.to_string(), Value::Object(Map::new()));
    }
    entries.get_mut(key).and_then(Value::as_object_mut)
}

fn runs_ccnotify(matcher: &Value) -> bool {
    matcher
        .get("hooks")
        .and_then(Value::as_array)
        .is_some_and(|hooks| {
            hooks.iter().any(|hook| {
                hook.get("command")
                    .and_then(Value::as_str)
                    .is_some_and(|command| command.contains(COMMAND_MARKER))
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(value: Value) -> JsonConfig {
        match value {
            Value::Object(entries) => JsonConfig::from_entries(entries),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_add_to_empty_settings() {
        let mut settings = JsonConfig::default();

        assert!(add_mcp_server(&mut settings, Path::new("/opt/bin/ccnotify-mcp")));
        assert!(add_notification_hook(&mut settings, Path::new("/opt/bin/ccnotify")));

        assert_eq!(
            Value::Object(settings.entries().clone()),
            json!({
                "mcpServers": {
                    "ccnotify": {"command": "/opt/bin/ccnotify-mcp", "args": []}
                },
                "hooks": {
                    "Notification": [{
                        "matcher": "*",
                        "hooks": [{
                            "type": "command",
                            "command": "\"/opt/bin/ccnotify\" hook notification"
                        }]
                    }]
                }
            })
        );
    }

    #[test]
    fn test_existing_entries_are_kept() {
        let mut settings = config(json!({
            "mcpServers": {"ccnotify": {"command": "node", "args": ["/old/index.js"]}},
            "hooks": {
                "Notification": [{
                    "matcher": "*",
                    "hooks": [{"type": "command", "command": "node /x/ccnotify/hook.js"}]
                }]
            }
        }));
        let before = settings.clone();

        assert!(!add_mcp_server(&mut settings, Path::new("/opt/bin/ccnotify-mcp")));
        assert!(!add_notification_hook(&mut settings, Path::new("/opt/bin/ccnotify")));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_remove_keeps_foreign_entries() {
        let mut settings = config(json!({
            "model": "opus",
            "mcpServers": {"github": {"command": "gh-mcp"}},
            "hooks": {
                "Notification": [{
                    "matcher": "*",
                    "hooks": [{"type": "command", "command": "say done"}]
                }],
                "Stop": []
            }
        }));
        let before = settings.clone();

        add_mcp_server(&mut settings, Path::new("/opt/bin/ccnotify-mcp"));
        add_notification_hook(&mut settings, Path::new("/opt/bin/ccnotify"));
        let notification = settings.entries()["hooks"]["Notification"].as_array().unwrap();
        assert_eq!(notification.len(), 2);

        assert!(remove_mcp_server(&mut settings));
        assert!(remove_notification_hooks(&mut settings));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_remove_from_settings_without_entries() {
        let mut settings = config(json!({"model": "opus"}));
        assert!(!remove_mcp_server(&mut settings));
        assert!(!remove_notification_hooks(&mut settings));
        assert_eq!(Value::Object(settings.entries().clone()), json!({"model": "opus"}));
    }
}
