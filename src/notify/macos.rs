//! Native macOS backend built on `osascript`, `open` and `afplay`

use super::request::{AudioOutcome, DispatchReport, NotificationRequest};
use super::Notifier;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

const BACKEND: &str = "osascript";

/// Escape text for an AppleScript string literal (double quotes only)
pub fn escape(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Build the `display notification` script for a request
///
/// The `sound name` clause is left out for silent requests and when an
/// audio clip will be played afterwards.
pub fn apple_script(request: &NotificationRequest) -> String {
    let mut script = format!(
        "display notification \"{}\" with title \"{}\"",
        escape(&request.message),
        escape(&request.title)
    );

    if let Some(subtitle) = &request.subtitle {
        script.push_str(&format!(" subtitle \"{}\"", escape(subtitle)));
    }

    if request.audio_clip.is_none() {
        if let Some(name) = request.sound.system_name() {
            script.push_str(&format!(" sound name \"{name}\""));
        }
    }

    script
}

/// Run a program to completion, failing on spawn errors and non-zero exit
pub(crate) async fn run_command(program: &str, args: &[&str]) -> AppResult<()> {
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| AppError::process_with_source(program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::ProcessStatus {
            command: program.to_string(),
            status: format!("{} {}", output.status, stderr.trim()),
        });
    }
    Ok(())
}

/// Notification Center backend
#[derive(Debug, Default, Clone)]
pub struct MacNotifier;

impl MacNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for MacNotifier {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn notify(&self, request: &NotificationRequest) -> AppResult<DispatchReport> {
        let script = apple_script(request);
        debug!("Running osascript: {}", script);

        run_command("osascript", &["-e", script.as_str()])
            .await
            .map_err(|e| {
                AppError::dispatch_with_source(BACKEND, "display notification failed", e)
            })?;

        let mut report = DispatchReport::new(BACKEND);

        if let Some(target) = &request.open {
            if let Err(e) = run_command("open", &[target.as_str()]).await {
                report.open_error = Some(e.to_string());
            }
        }

        if let Some(clip) = &request.audio_clip {
            report.audio = if !clip.exists() {
                AudioOutcome::Missing(clip.clone())
            } else {
                let clip = clip.to_string_lossy();
                match run_command("afplay", &[clip.as_ref()]).await {
                    Ok(()) => AudioOutcome::Played,
                    Err(e) => AudioOutcome::Failed(e.to_string()),
                }
            };
        }

        if let Some(duration) = request.wait_duration() {
            tokio::time::sleep(duration).await;
            report.waited = Some(duration);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Sound;
    use std::path::PathBuf;

    #[test]
    fn test_escape_double_quotes_only() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape("it's"), "it's");
    }

    #[test]
    fn test_script_with_sound_and_subtitle() {
        let request = NotificationRequest::new("✅ Task Complete", "Built \"app\"")
            .with_sound(Sound::Success)
            .with_subtitle(Some("release".to_string()));

        assert_eq!(
            apple_script(&request),
            concat!(
                r#"display notification "Built \"app\"" with title "✅ Task Complete" "#,
                r#"subtitle "release" sound name "Glass""#
            )
        );
    }

    #[test]
    fn test_script_silent_has_no_sound_clause() {
        let request = NotificationRequest::new("Title", "Body").with_sound(Sound::Silent);
        assert_eq!(
            apple_script(&request),
            r#"display notification "Body" with title "Title""#
        );
    }

    #[test]
    fn test_script_audio_clip_replaces_system_sound() {
        let request = NotificationRequest::new("Title", "Body")
            .with_sound(Sound::Warning)
            .with_audio_clip(Some(PathBuf::from("/tmp/meow.mp3")));
        assert!(!apple_script(&request).contains("sound name"));
    }
}
