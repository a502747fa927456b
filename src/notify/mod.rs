//! Notification dispatch
//!
//! A [`Notifier`] shows one [`NotificationRequest`] on the host platform.
//! [`Dispatcher`] applies the notification settings before handing the
//! request to the platform backend picked by [`create_platform_notifier`].
//!
//! Every dispatch returns an [`AppResult`]; nothing here logs failures or
//! prints fallbacks, that is left to the caller.

pub mod desktop;
pub mod macos;
pub mod request;
pub mod sound;

pub use desktop::DesktopNotifier;
pub use macos::MacNotifier;
pub use request::{AudioOutcome, DispatchReport, NotificationRequest};
pub use sound::Sound;

use crate::config::NotificationSettings;
use crate::errors::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Platform notification backend
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short backend name used in logs and reports
    fn backend(&self) -> &'static str;

    /// Show the notification and run its follow-up actions
    async fn notify(&self, request: &NotificationRequest) -> AppResult<DispatchReport>;
}

/// Pick the native backend on macOS and `notify-rust` elsewhere
pub fn create_platform_notifier() -> Arc<dyn Notifier> {
    if cfg!(target_os = "macos") {
        Arc::new(MacNotifier::new())
    } else {
        Arc::new(DesktopNotifier::new())
    }
}

/// Settings-aware front end for a [`Notifier`]
#[derive(Clone)]
pub struct Dispatcher {
    notifier: Arc<dyn Notifier>,
    settings: NotificationSettings,
}

impl Dispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, settings: NotificationSettings) -> Self {
        Self { notifier, settings }
    }

    pub fn backend(&self) -> &'static str {
        self.notifier.backend()
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    /// Validate and normalize the request, then show it
    pub async fn dispatch(&self, request: NotificationRequest) -> AppResult<DispatchReport> {
        let request = request.normalized(&self.settings)?;
        self.notifier.notify(&request).await
    }
}
