//! Notification request and dispatch report types

use super::Sound;
use crate::config::NotificationSettings;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// A single notification to show; built per event and consumed once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub sound: Sound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    /// URL or file path opened after the notification is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open: Option<String>,
    #[serde(default)]
    pub wait: bool,
    /// Audio file played after the notification instead of a system sound
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_clip: Option<PathBuf>,
}

impl NotificationRequest {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            sound: Sound::Default,
            subtitle: None,
            timeout: None,
            open: None,
            wait: false,
            audio_clip: None,
        }
    }

    pub fn with_sound(mut self, sound: Sound) -> Self {
        self.sound = sound;
        self
    }

    /// Empty subtitles are dropped
    pub fn with_subtitle(mut self, subtitle: Option<String>) -> Self {
        self.subtitle = subtitle.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<u64>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_open(mut self, open: Option<String>) -> Self {
        self.open = open.filter(|s| !s.trim().is_empty());
        self
    }

    pub fn with_wait(mut self, wait: bool) -> Self {
        self.wait = wait;
        self
    }

    pub fn with_audio_clip(mut self, clip: Option<PathBuf>) -> Self {
        self.audio_clip = clip;
        self
    }

    /// Reject requests without a title or message
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() || self.message.trim().is_empty() {
            return Err(AppError::InvalidNotification(
                "Title and message are required".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply settings: validation, length limits, timeout bounds, sound switch
    pub fn normalized(mut self, settings: &NotificationSettings) -> AppResult<Self> {
        self.validate()?;

        self.title = truncate_chars(&self.title, settings.max_title_length);
        self.message = truncate_chars(&self.message, settings.max_message_length);
        self.subtitle = self
            .subtitle
            .map(|s| truncate_chars(&s, settings.max_title_length));
        self.timeout = self
            .timeout
            .map(|t| t.clamp(MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS));

        if !settings.enable_sounds {
            self.sound = Sound::Silent;
            self.audio_clip = None;
        }

        Ok(self)
    }

    /// How long to block after showing the notification
    pub fn wait_duration(&self) -> Option<Duration> {
        if self.wait {
            self.timeout.map(Duration::from_secs)
        } else {
            None
        }
    }
}

/// Shorten to at most `max` characters, marking the cut with an ellipsis
pub fn truncate_chars(text: &str, max: usize) -> String {
    if max == 0 || text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// What happened to the audio clip attached to a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioOutcome {
    NotRequested,
    Played,
    /// The backend has no way to play a clip
    Unsupported,
    Missing(PathBuf),
    Failed(String),
}

/// Result of a successful dispatch
///
/// Secondary failures (audio, open target) are recorded here instead of
/// failing the dispatch so the caller can log them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    pub backend: &'static str,
    pub audio: AudioOutcome,
    pub open_error: Option<String>,
    pub waited: Option<Duration>,
}

impl DispatchReport {
    pub fn new(backend: &'static str) -> Self {
        Self {
            backend,
            audio: AudioOutcome::NotRequested,
            open_error: None,
            waited: None,
        }
    }
}
