//! Skip filter
//!
//! Decides which hook events are not worth a notification: empty payloads,
//! blank fields, and chatter that matches a skip pattern.

use super::types::{HookEvent, HookInput, SkipReason};
use crate::config::HookSettings;
use regex::Regex;
use tracing::warn;

/// Trait for hook filters
pub trait HookFilter: Send + Sync {
    /// `Some(reason)` when the event should not produce a notification
    fn should_skip(&self, input: &HookInput) -> Option<SkipReason>;
}

/// Filter driven by the configured skip patterns
pub struct DefaultHookFilter {
    patterns: Vec<(String, Regex)>,
}

impl DefaultHookFilter {
    pub fn new(settings: &HookSettings) -> Self {
        Self::with_patterns(&settings.skip_patterns)
    }

    /// Build from pattern strings; invalid regexes are matched literally
    pub fn with_patterns(patterns: &[String]) -> Self {
        let patterns = patterns
            .iter()
            .filter(|p| !p.trim().is_empty())
            .filter_map(|pattern| {
                let compiled = Regex::new(&format!("(?i){pattern}")).or_else(|e| {
                    warn!("Invalid skip pattern '{}' ({}), matching literally", pattern, e);
                    Regex::new(&format!("(?i){}", regex::escape(pattern)))
                });
                compiled.ok().map(|regex| (pattern.clone(), regex))
            })
            .collect();
        Self { patterns }
    }

    fn matching_pattern(&self, content: &str) -> Option<&str> {
        self.patterns
            .iter()
            .find(|(_, regex)| regex.is_match(content))
            .map(|(pattern, _)| pattern.as_str())
    }
}

impl Default for DefaultHookFilter {
    fn default() -> Self {
        Self::new(&HookSettings::default())
    }
}

impl HookFilter for DefaultHookFilter {
    fn should_skip(&self, input: &HookInput) -> Option<SkipReason> {
        if input.is_empty() {
            return Some(SkipReason::NoData);
        }

        // Stop events only need some visible text
        if input.event == HookEvent::Stop {
            let blank = input.title.trim().is_empty() && input.message.trim().is_empty();
            return blank.then_some(SkipReason::Blank);
        }

        if input.title.trim().is_empty() || input.message.trim().is_empty() {
            return Some(SkipReason::Blank);
        }

        let content = format!("{} {}", input.title, input.message).to_lowercase();
        self.matching_pattern(&content)
            .map(|pattern| SkipReason::Filtered(pattern.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::types::InputSource;

    fn input(event: HookEvent, title: &str, message: &str) -> HookInput {
        HookInput {
            event,
            title: title.to_string(),
            message: message.to_string(),
            level: "info".to_string(),
            source: InputSource::Json,
        }
    }

    #[test]
    fn test_empty_input_is_skipped() {
        let filter = DefaultHookFilter::default();
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, "", "")),
            Some(SkipReason::NoData)
        );
        assert_eq!(
            filter.should_skip(&input(HookEvent::Stop, "", "")),
            Some(SkipReason::NoData)
        );
    }

    #[test]
    fn test_blank_fields_are_skipped() {
        let filter = DefaultHookFilter::default();
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, "Claude Code", "   ")),
            Some(SkipReason::Blank)
        );
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, " ", "hello")),
            Some(SkipReason::Blank)
        );
    }

    #[test]
    fn test_skip_patterns() {
        let filter = DefaultHookFilter::default();
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, "Debug", "cache hit")),
            Some(SkipReason::Filtered("debug".to_string()))
        );
        assert!(filter
            .should_skip(&input(HookEvent::Notification, "Note", "File system updated"))
            .is_some());
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, "Build", "complete")),
            None
        );
    }

    #[test]
    fn test_stop_events_ignore_patterns() {
        let filter = DefaultHookFilter::default();
        assert_eq!(
            filter.should_skip(&input(HookEvent::Stop, "System", "")),
            None
        );
        assert_eq!(
            filter.should_skip(&input(HookEvent::Stop, "   ", "Debug output")),
            None
        );
    }

    #[test]
    fn test_whitespace_stop_is_skipped() {
        let filter = DefaultHookFilter::default();
        assert_eq!(
            filter.should_skip(&input(HookEvent::Stop, "   ", " \t ")),
            Some(SkipReason::Blank)
        );
    }

    #[test]
    fn test_custom_and_invalid_patterns() {
        let filter =
            DefaultHookFilter::with_patterns(&["heartbeat".to_string(), "(".to_string()]);
        assert!(filter
            .should_skip(&input(HookEvent::Notification, "HEARTBEAT", "ok"))
            .is_some());
        assert!(filter
            .should_skip(&input(HookEvent::Notification, "Paren (", "ok"))
            .is_some());
        assert_eq!(
            filter.should_skip(&input(HookEvent::Notification, "Debug", "ok")),
            None
        );
    }
}
