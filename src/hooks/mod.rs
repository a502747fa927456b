//! Hook processing for cat-ccnotify
//!
//! The host application runs a hook for each notification and session stop
//! event. Each run reads the event ([`input`]), drops noise ([`filter`]),
//! picks a category ([`classifier`]), styles the text ([`enhancer`]) and
//! hands a request to the dispatcher.

pub mod classifier;
pub mod enhancer;
pub mod filter;
pub mod input;
pub mod processor;
pub mod types;

pub use processor::{DefaultHookProcessor, HookProcessor};
pub use types::{Category, HookArgs, HookEvent, HookInput, HookOutcome, ProcessedNotification};

use crate::config::ConfigManager;

/// Create the hook processor configured from settings
pub fn create_default_processor(config: &ConfigManager) -> DefaultHookProcessor {
    let enhancer = enhancer::DefaultStyleEnhancer::new();
    let filter = filter::DefaultHookFilter::new(&config.settings().hooks);
    DefaultHookProcessor::new(enhancer, filter).with_audio_clip(Some(config.sound_file()))
}
