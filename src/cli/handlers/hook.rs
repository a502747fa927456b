//! Hook processing handler
//!
//! Runs one hook event end to end. Hooks never fail the host: every problem
//! is logged and, when a notification could not be shown, its text is
//! printed to stdout instead.

use super::super::CliContext;
use crate::hooks::input::{self, InputAdapter};
use crate::hooks::processor::HookProcessor;
use crate::hooks::{
    self, DefaultHookProcessor, HookArgs, HookEvent, HookInput, HookOutcome,
    ProcessedNotification,
};
use crate::notify::{AudioOutcome, Dispatcher};
use anyhow::Result;
use tracing::{debug, error, info, warn};

/// Handler for hook processing operations
pub struct HookHandler<'a> {
    context: &'a CliContext,
    hook_processor: DefaultHookProcessor,
}

impl<'a> HookHandler<'a> {
    /// Create new hook handler
    pub fn new(context: &'a CliContext) -> Self {
        Self {
            context,
            hook_processor: hooks::create_default_processor(&context.config_manager),
        }
    }

    /// Handle a hook invocation, reading the payload from stdin
    pub async fn handle_hook(
        &self,
        event: HookEvent,
        args: HookArgs,
        dry_run: bool,
    ) -> Result<()> {
        let stdin = input::read_stdin();
        let dispatcher = self.context.dispatcher();
        self.handle_input(&dispatcher, event, &stdin, &args, dry_run)
            .await
    }

    /// Handle an already-read payload with the given dispatcher
    pub async fn handle_input(
        &self,
        dispatcher: &Dispatcher,
        event: HookEvent,
        stdin: &str,
        args: &HookArgs,
        dry_run: bool,
    ) -> Result<()> {
        for line in self.run(dispatcher, event, stdin, args, dry_run).await {
            println!("{line}");
        }
        Ok(())
    }

    /// Process one event and return the lines to print on stdout
    async fn run(
        &self,
        dispatcher: &Dispatcher,
        event: HookEvent,
        stdin: &str,
        args: &HookArgs,
        dry_run: bool,
    ) -> Vec<String> {
        info!("=== {} hook triggered ===", event);

        let input = InputAdapter::new(event).adapt(stdin, args);
        debug!("Hook triggered - Title: {:?}", input.title);
        debug!("Hook triggered - Message: {:?}", input.message);
        debug!("Hook triggered - Level: {:?}", input.level);
        debug!("Hook triggered - Input method: {:?}", input.source);

        match self.hook_processor.process(&input) {
            HookOutcome::Skipped(reason) => {
                debug!("Not notifying ({}), exiting", reason);
                Vec::new()
            }
            HookOutcome::Dispatch(processed) if dry_run => dry_run_lines(&processed),
            HookOutcome::Dispatch(processed) => dispatch(dispatcher, processed, &input)
                .await
                .into_iter()
                .collect(),
        }
    }
}

/// Send the notification; on failure return the raw input as a console line
async fn dispatch(
    dispatcher: &Dispatcher,
    processed: ProcessedNotification,
    input: &HookInput,
) -> Option<String> {
    let title = processed.request.title.clone();
    let message = processed.request.message.clone();

    match dispatcher.dispatch(processed.request).await {
        Ok(report) => {
            info!("Notification sent via {}: {} - {}", report.backend, title, message);
            match report.audio {
                AudioOutcome::Played => debug!("Custom sound played"),
                AudioOutcome::Missing(path) => {
                    info!("Sound file not found: {}", path.display())
                }
                AudioOutcome::Failed(reason) => {
                    debug!("Failed to play custom sound: {}", reason)
                }
                AudioOutcome::Unsupported => {
                    debug!("Custom sound not supported by {}", report.backend)
                }
                AudioOutcome::NotRequested => {}
            }
            if let Some(e) = report.open_error {
                warn!("Failed to open notification target: {}", e);
            }
            None
        }
        Err(e) => {
            error!("Failed to send {} hook notification: {}", processed.event, e);
            Some(format!("{}: {}", input.title, input.message))
        }
    }
}

fn dry_run_lines(processed: &ProcessedNotification) -> Vec<String> {
    let request = &processed.request;
    let mut lines = vec![
        "Dry run - would send notification:".to_string(),
        format!("Event: {}", processed.event),
    ];
    if let Some(category) = processed.category {
        lines.push(format!("Category: {category}"));
    }
    lines.push(format!("Title: {}", request.title));
    lines.push(format!("Message: {}", request.message));
    lines.push(format!("Sound: {}", request.sound));
    if let Some(clip) = &request.audio_clip {
        lines.push(format!("Audio clip: {}", clip.display()));
    }
    lines
}

super::traits::context_handler!(HookHandler);
