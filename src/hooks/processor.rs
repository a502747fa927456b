//! Hook processing pipeline
//!
//! Runs a [`HookInput`] through filtering, classification and styling and
//! produces either a skip decision or a request ready for the dispatcher.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use super::classifier::classify;
use super::enhancer::StyleEnhancer;
use super::filter::HookFilter;
use super::types::{HookEvent, HookInput, HookOutcome, ProcessedNotification};
use crate::notify::{NotificationRequest, Sound};

/// Trait for hook processors
pub trait HookProcessor: Send + Sync {
    /// Decide what notification, if any, an event produces
    fn process(&self, input: &HookInput) -> HookOutcome;
}

/// Default pipeline: filter, classify (notification events only), style
pub struct DefaultHookProcessor {
    enhancer: Arc<dyn StyleEnhancer>,
    filter: Arc<dyn HookFilter>,
    audio_clip: Option<PathBuf>,
}

impl DefaultHookProcessor {
    pub fn new(
        enhancer: impl StyleEnhancer + 'static,
        filter: impl HookFilter + 'static,
    ) -> Self {
        Self {
            enhancer: Arc::new(enhancer),
            filter: Arc::new(filter),
            audio_clip: None,
        }
    }

    /// Attach the audio clip played after every hook notification
    pub fn with_audio_clip(mut self, clip: Option<PathBuf>) -> Self {
        self.audio_clip = clip;
        self
    }
}

impl HookProcessor for DefaultHookProcessor {
    fn process(&self, input: &HookInput) -> HookOutcome {
        if let Some(reason) = self.filter.should_skip(input) {
            debug!("Skipping {} hook: {}", input.event, reason);
            return HookOutcome::Skipped(reason);
        }

        let (category, styled, sound) = match input.event {
            HookEvent::Notification => {
                let classification = classify(&input.title, &input.message);
                debug!(
                    "Classified as {} (rule: {})",
                    classification.category,
                    classification.rule.unwrap_or("default")
                );
                let styled = self
                    .enhancer
                    .enhance(&input.title, &input.message, classification.category);
                (
                    Some(classification.category),
                    styled,
                    classification.category.sound(),
                )
            }
            HookEvent::Stop => {
                let styled = self.enhancer.enhance_stop(&input.title, &input.message);
                (None, styled, Sound::Silent)
            }
        };

        let request = NotificationRequest::new(styled.title, styled.message)
            .with_sound(sound)
            .with_audio_clip(self.audio_clip.clone());

        HookOutcome::Dispatch(ProcessedNotification {
            event: input.event,
            category,
            request,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::enhancer::DefaultStyleEnhancer;
    use crate::hooks::filter::DefaultHookFilter;
    use crate::hooks::types::{Category, InputSource, SkipReason};

    fn processor() -> DefaultHookProcessor {
        DefaultHookProcessor::new(DefaultStyleEnhancer::new(), DefaultHookFilter::default())
            .with_audio_clip(Some(PathBuf::from("/tmp/meow.mp3")))
    }

    fn input(event: HookEvent, title: &str, message: &str) -> HookInput {
        HookInput {
            event,
            title: title.to_string(),
            message: message.to_string(),
            level: "info".to_string(),
            source: InputSource::Json,
        }
    }

    fn dispatched(outcome: HookOutcome) -> ProcessedNotification {
        match outcome {
            HookOutcome::Dispatch(processed) => processed,
            HookOutcome::Skipped(reason) => panic!("unexpected skip: {reason}"),
        }
    }

    #[test]
    fn test_notification_pipeline() {
        let processed = dispatched(processor().process(&input(
            HookEvent::Notification,
            "Build Success",
            "✅ All tests passed",
        )));

        assert_eq!(processed.category, Some(Category::Success));
        assert_eq!(processed.request.title, "✅ Build Success");
        assert_eq!(processed.request.message, "✅ All tests passed");
        assert_eq!(processed.request.sound, Sound::Success);
        assert_eq!(
            processed.request.audio_clip,
            Some(PathBuf::from("/tmp/meow.mp3"))
        );
    }

    #[test]
    fn test_emoji_title_is_unmodified() {
        let processed = dispatched(processor().process(&input(
            HookEvent::Notification,
            "🎉 Release",
            "v1.2 published",
        )));
        assert_eq!(processed.request.title, "🎉 Release");
    }

    #[test]
    fn test_empty_notification_is_skipped() {
        assert_eq!(
            processor().process(&input(HookEvent::Notification, "", "")),
            HookOutcome::Skipped(SkipReason::NoData)
        );
    }

    #[test]
    fn test_stop_pipeline() {
        let processed = dispatched(processor().process(&input(
            HookEvent::Stop,
            "Claude Code Session",
            "Session Stopped",
        )));

        assert_eq!(processed.category, None);
        assert_eq!(processed.request.title, "🐱 Claude Code Session");
        assert_eq!(processed.request.message, "Session ended: Session Stopped");
        assert_eq!(processed.request.sound, Sound::Silent);
    }

    #[test]
    fn test_whitespace_stop_is_skipped() {
        assert_eq!(
            processor().process(&input(HookEvent::Stop, "   ", "   ")),
            HookOutcome::Skipped(SkipReason::Blank)
        );
    }
}
