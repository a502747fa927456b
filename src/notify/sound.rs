//! Sound categories and their platform sound names

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of notification sounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Success,
    Info,
    Warning,
    Error,
    Progress,
    Reminder,
    #[default]
    Default,
    Silent,
}

impl Sound {
    /// Every sound, in the order they are listed to users
    pub const ALL: [Sound; 8] = [
        Sound::Success,
        Sound::Info,
        Sound::Warning,
        Sound::Error,
        Sound::Progress,
        Sound::Reminder,
        Sound::Default,
        Sound::Silent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Success => "success",
            Sound::Info => "info",
            Sound::Warning => "warning",
            Sound::Error => "error",
            Sound::Progress => "progress",
            Sound::Reminder => "reminder",
            Sound::Default => "default",
            Sound::Silent => "silent",
        }
    }

    /// macOS system sound name, `None` for silent
    pub fn system_name(&self) -> Option<&'static str> {
        match self {
            Sound::Success => Some("Glass"),
            Sound::Info => Some("Blow"),
            Sound::Warning => Some("Sosumi"),
            Sound::Error => Some("Basso"),
            Sound::Progress => Some("Tink"),
            Sound::Reminder => Some("Ping"),
            Sound::Default => Some("default"),
            Sound::Silent => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Sound::Success => "Success notification - task completion, successful operations",
            Sound::Info => "Information notification - status updates, general information",
            Sound::Warning => "Warning notification - attention needed, caution required",
            Sound::Error => "Error notification - failures, critical issues",
            Sound::Progress => "Progress notification - ongoing work, updates",
            Sound::Reminder => "Reminder notification - prompts, scheduled alerts",
            Sound::Default => "Default system notification sound",
            Sound::Silent => "No sound - silent notification",
        }
    }

    /// Markdown table of all sounds, shared by the CLI and the tool server
    pub fn catalog() -> String {
        let list = Self::ALL
            .iter()
            .map(|sound| format!("• **{}**: {}", sound.as_str(), sound.description()))
            .collect::<Vec<_>>()
            .join("\n");
        format!("## Available Notification Sounds\n\n{list}")
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sound {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sound| sound.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                AppError::invalid_argument(
                    "sound",
                    format!(
                        "unknown sound '{}', expected one of: {}",
                        s,
                        Self::ALL.map(|s| s.as_str()).join(", ")
                    ),
                )
            })
    }
}
