use crate::errors::{AppError, AppResult};
use crate::notify::Sound;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the Claude config dir that holds our logs, scripts and settings
pub const DATA_DIR_NAME: &str = "cat-ccnotify";

/// File name of the bundled audio clip played after each hook notification
pub const SOUND_FILE_NAME: &str = "cat-meow-1-fx-323465.mp3";

/// Environment variable overriding the bundled audio clip location
pub const SOUND_ENV_VAR: &str = "CAT_CCNOTIFY_SOUND";

/// Filesystem locations used by every component
///
/// Resolved once at startup and handed to the hook runner, dispatcher,
/// tool server and installer instead of being looked up ad hoc.
///
/// # Layout
///
/// ```text
/// <claude_dir>/hooks.json                      hook registration
/// <claude_dir>/cat-ccnotify/config.toml        settings
/// <claude_dir>/cat-ccnotify/*.log              debug logs
/// <claude_dir>/cat-ccnotify/hooks/*.sh         hook wrapper scripts
/// <claude_dir>/cat-ccnotify/sounds/*.mp3       bundled audio clip
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub claude_dir: PathBuf,
    pub hooks_config: PathBuf,
    /// Claude Code `settings.json` (MCP servers and hook matchers)
    pub host_settings: PathBuf,
    pub data_dir: PathBuf,
    pub settings_file: PathBuf,
    pub hook_scripts_dir: PathBuf,
    pub default_sound_file: PathBuf,
}

impl AppPaths {
    /// Build the path set rooted at an explicit Claude configuration directory
    pub fn from_claude_dir(claude_dir: impl Into<PathBuf>) -> Self {
        let claude_dir = claude_dir.into();
        let data_dir = claude_dir.join(DATA_DIR_NAME);

        Self {
            hooks_config: claude_dir.join("hooks.json"),
            host_settings: claude_dir.join("settings.json"),
            settings_file: data_dir.join("config.toml"),
            hook_scripts_dir: data_dir.join("hooks"),
            default_sound_file: data_dir.join("sounds").join(SOUND_FILE_NAME),
            data_dir,
            claude_dir,
        }
    }

    /// Resolve paths from an optional override, falling back to `~/.claude`
    pub fn resolve(claude_dir: Option<PathBuf>) -> AppResult<Self> {
        match claude_dir {
            Some(dir) => Ok(Self::from_claude_dir(dir)),
            None => {
                let base_dirs = BaseDirs::new().ok_or(AppError::HomeDirNotFound)?;
                Ok(Self::from_claude_dir(base_dirs.home_dir().join(".claude")))
            }
        }
    }

    /// Path of the debug log for a named component
    pub fn log_file(&self, component: &str) -> PathBuf {
        self.data_dir.join(format!("{component}.log"))
    }
}

/// Persistent settings loaded from `config.toml`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub hooks: HookSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationSettings {
    /// When false every notification is sent silent
    pub enable_sounds: bool,
    pub default_sound: Sound,
    pub max_title_length: usize,
    pub max_message_length: usize,
    /// Audio clip played after hook notifications
    pub sound_file: Option<PathBuf>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enable_sounds: true,
            default_sound: Sound::Default,
            max_title_length: 100,
            max_message_length: 500,
            sound_file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HookSettings {
    /// Case-insensitive patterns; matching notifications are not shown
    pub skip_patterns: Vec<String>,
}

impl Default for HookSettings {
    fn default() -> Self {
        Self {
            skip_patterns: ["debug", "verbose", "trace", "internal", "system"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level used for the debug log file
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

/// Loads settings and answers path questions that depend on them
pub struct ConfigManager {
    paths: AppPaths,
    settings: Settings,
    load_warning: Option<String>,
}

impl ConfigManager {
    /// Load settings from `paths.settings_file`
    ///
    /// A missing file yields defaults. A malformed file also yields defaults
    /// and records a warning (see [`ConfigManager::load_warning`]); it is
    /// never fatal for a hook run. Settings are read before logging is set
    /// up, so the caller reports the warning once a subscriber exists.
    pub fn load(paths: AppPaths) -> Self {
        let (settings, load_warning) = match Self::read_settings(&paths.settings_file) {
            Ok(Some(settings)) => (settings, None),
            Ok(None) => (Settings::default(), None),
            Err(e) => (
                Settings::default(),
                Some(format!("Ignoring unreadable settings file: {e}")),
            ),
        };

        Self {
            paths,
            settings,
            load_warning,
        }
    }

    /// Problem encountered while loading, if any
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    fn read_settings(path: &Path) -> AppResult<Option<Settings>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::io_with_source(path, "read settings file", e))?;
        let settings = toml::from_str(&content)
            .map_err(|e| AppError::config_with_source("Failed to parse settings file", e))?;
        Ok(Some(settings))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Audio clip for hook notifications: settings, then env, then the data dir
    pub fn sound_file(&self) -> PathBuf {
        self.settings
            .notifications
            .sound_file
            .clone()
            .or_else(|| std::env::var_os(SOUND_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(|| self.paths.default_sound_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_layout() {
        let paths = AppPaths::from_claude_dir("/home/user/.claude");

        assert_eq!(paths.hooks_config, PathBuf::from("/home/user/.claude/hooks.json"));
        assert_eq!(
            paths.host_settings,
            PathBuf::from("/home/user/.claude/settings.json")
        );
        assert_eq!(
            paths.settings_file,
            PathBuf::from("/home/user/.claude/cat-ccnotify/config.toml")
        );
        assert_eq!(
            paths.log_file("stop-hook"),
            PathBuf::from("/home/user/.claude/cat-ccnotify/stop-hook.log")
        );
        assert!(paths.default_sound_file.ends_with("sounds/cat-meow-1-fx-323465.mp3"));
    }

    #[test]
    fn test_missing_settings_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = ConfigManager::load(AppPaths::from_claude_dir(temp_dir.path()));

        assert_eq!(manager.settings(), &Settings::default());
        assert!(manager.settings().notifications.enable_sounds);
        assert_eq!(manager.settings().notifications.max_title_length, 100);
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_claude_dir(temp_dir.path());
        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::write(&paths.settings_file, "this is = = not toml").unwrap();

        let manager = ConfigManager::load(paths);
        assert_eq!(manager.settings(), &Settings::default());
        assert!(manager.load_warning().is_some());
    }

    #[test]
    fn test_partial_settings_are_merged_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_claude_dir(temp_dir.path());
        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::write(
            &paths.settings_file,
            "[notifications]\nenable_sounds = false\ndefault_sound = \"info\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load(paths);
        let notifications = &manager.settings().notifications;
        assert!(!notifications.enable_sounds);
        assert_eq!(notifications.default_sound, Sound::Info);
        assert_eq!(notifications.max_message_length, 500);
        assert_eq!(manager.settings().hooks, HookSettings::default());
    }

    #[test]
    fn test_serialized_settings_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::from_claude_dir(temp_dir.path());
        let mut settings = Settings::default();
        settings.hooks.skip_patterns = vec!["heartbeat".to_string()];
        settings.notifications.sound_file = Some(PathBuf::from("/tmp/meow.mp3"));

        fs::create_dir_all(&paths.data_dir).unwrap();
        fs::write(&paths.settings_file, toml::to_string_pretty(&settings).unwrap()).unwrap();
        let reloaded = ConfigManager::load(paths);

        assert_eq!(reloaded.settings(), &settings);
        assert_eq!(reloaded.sound_file(), PathBuf::from("/tmp/meow.mp3"));
    }
}
