//! Cross-platform backend using `notify-rust`

use super::macos::run_command;
use super::request::{AudioOutcome, DispatchReport, NotificationRequest};
use super::Notifier;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use notify_rust::{Notification, Timeout};

const BACKEND: &str = "notify-rust";

/// Desktop notifications for Linux (freedesktop) and Windows
#[derive(Debug, Default, Clone)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Subtitles have no freedesktop equivalent, so they lead the body
fn body(request: &NotificationRequest) -> String {
    match &request.subtitle {
        Some(subtitle) => format!("{}\n{}", subtitle, request.message),
        None => request.message.clone(),
    }
}

fn opener() -> (&'static str, &'static [&'static str]) {
    const WINDOWS_START: &[&str] = &["/C", "start", ""];
    const NO_ARGS: &[&str] = &[];

    if cfg!(target_os = "windows") {
        ("cmd", WINDOWS_START)
    } else if cfg!(target_os = "macos") {
        ("open", NO_ARGS)
    } else {
        ("xdg-open", NO_ARGS)
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn notify(&self, request: &NotificationRequest) -> AppResult<DispatchReport> {
        let summary = request.title.clone();
        let body = body(request);
        let sound = request.sound.system_name().map(str::to_string);
        let timeout_ms = request
            .timeout
            .map(|secs| u32::try_from(secs.saturating_mul(1000)).unwrap_or(u32::MAX));

        tokio::task::spawn_blocking(move || {
            let mut notification = Notification::new();
            notification.summary(&summary).body(&body);
            if let Some(sound) = &sound {
                notification.sound_name(sound);
            }
            if let Some(ms) = timeout_ms {
                notification.timeout(Timeout::Milliseconds(ms));
            }
            notification.show().map(|_| ()).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| AppError::dispatch_with_source(BACKEND, "notification task panicked", e))?
        .map_err(|reason| AppError::dispatch(BACKEND, reason))?;

        let mut report = DispatchReport::new(BACKEND);

        if let Some(target) = &request.open {
            let (program, prefix) = opener();
            let mut args: Vec<&str> = prefix.to_vec();
            args.push(target.as_str());
            if let Err(e) = run_command(program, &args).await {
                report.open_error = Some(e.to_string());
            }
        }

        if request.audio_clip.is_some() {
            report.audio = AudioOutcome::Unsupported;
        }

        if let Some(duration) = request.wait_duration() {
            tokio::time::sleep(duration).await;
            report.waited = Some(duration);
        }

        Ok(report)
    }
}
