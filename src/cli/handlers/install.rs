//! Install, uninstall and setup handlers

use super::super::CliContext;
use crate::installer::{preflight, Installer, SetupRemoval, UninstallOutcome};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const MCP_BINARY: &str = "ccnotify-mcp";

pub(crate) fn log(message: &str) {
    println!("🐱 {message}");
}

pub(crate) fn success(message: &str) {
    println!("✅ {message}");
}

pub(crate) fn banner(title: &str) {
    println!("🐱 {title}");
    println!("{}", "=".repeat(title.chars().count() + 3));
}

/// Handler for hook registration
pub struct InstallHandler<'a> {
    context: &'a CliContext,
}

impl<'a> InstallHandler<'a> {
    pub fn new(context: &'a CliContext) -> Self {
        Self { context }
    }

    pub fn handle_install(&self) -> Result<()> {
        banner("cat-ccnotify installer");

        preflight::check_platform()?;
        preflight::check_host_cli()?;

        let executable =
            std::env::current_exe().context("Failed to locate the ccnotify executable")?;

        log("Installing cat-ccnotify hooks...");
        let report = Installer::new(&self.context.paths, executable)
            .install()
            .context("Installation failed")?;

        if report.created_claude_dir {
            log(&format!(
                "Created Claude config directory: {}",
                self.context.paths.claude_dir.display()
            ));
        }
        if let Some(warning) = &report.parse_warning {
            log(&format!("Warning: Could not parse existing hooks config: {warning}"));
        }

        success("Cat notification hooks installed successfully!");
        log(&format!("Configuration saved to: {}", report.hooks_config.display()));
        log(&format!("Notification hook: {}", report.scripts.notification.display()));
        log(&format!("Stop hook: {}", report.scripts.stop.display()));
        log("");
        log("🎵 Features enabled:");
        log("  • Enhanced notifications with cat sounds");
        log("  • Better styling with emojis");
        log("  • Intelligent notification categorization");
        log("  • Special stop session notifications");
        log("");
        log("🧪 Test your installation with:");
        log("  ccnotify test");

        Ok(())
    }

    pub fn handle_uninstall(&self) -> Result<()> {
        banner("cat-ccnotify uninstaller");
        log("Uninstalling cat-ccnotify hooks...");

        let outcome = Installer::new(&self.context.paths, "")
            .uninstall()
            .context("Uninstallation failed")?;

        match outcome {
            UninstallOutcome::NothingToUninstall => {
                log("No hooks configuration found. Nothing to uninstall.");
            }
            UninstallOutcome::Removed {
                hooks_config,
                had_hooks,
            } => {
                if !had_hooks {
                    log("cat-ccnotify hooks were not registered.");
                }
                success("Cat notification hooks uninstalled successfully!");
                log(&format!("Configuration updated: {}", hooks_config.display()));
                log("Your Claude Code will now use default notifications.");
            }
        }

        Ok(())
    }

    pub fn handle_setup(&self, remove: bool) -> Result<()> {
        let executable =
            std::env::current_exe().context("Failed to locate the ccnotify executable")?;
        let installer = Installer::new(&self.context.paths, executable.clone());

        if remove {
            banner("cat-ccnotify settings cleanup");
            return match installer.remove_setup().context("Setup removal failed")? {
                SetupRemoval::NothingToRemove => {
                    log("No Claude Code settings found. Nothing to remove.");
                    Ok(())
                }
                SetupRemoval::Removed {
                    settings_file,
                    mcp_server_removed,
                    hook_removed,
                } => {
                    if !mcp_server_removed && !hook_removed {
                        log("ccnotify was not configured in settings.json.");
                    }
                    success(&format!("Settings saved to {}", settings_file.display()));
                    Ok(())
                }
            };
        }

        banner("cat-ccnotify settings setup");
        let mcp_server = mcp_server_path(&executable);
        if !mcp_server.exists() {
            bail!(
                "Setup validation failed. Missing: {} (build both binaries first)",
                mcp_server.display()
            );
        }

        let report = installer
            .setup(&mcp_server)
            .context("Failed to update Claude Code settings")?;

        if report.created {
            log("No existing Claude Code settings found, creating new configuration");
        }
        if let Some(warning) = &report.parse_warning {
            log(&format!("Warning: Could not parse existing settings: {warning}"));
        }
        if report.mcp_server_added {
            log("Added ccnotify MCP server configuration");
        } else {
            log("ccnotify MCP server already configured");
        }
        if report.hook_added {
            log("Added Notification hook");
        } else {
            log("Notification hook already configured");
        }
        success(&format!("Settings saved to {}", report.settings_file.display()));
        log("Restart Claude Code if it is currently running.");

        Ok(())
    }
}

/// The MCP server binary installed next to `executable`
fn mcp_server_path(executable: &Path) -> PathBuf {
    executable.with_file_name(format!("{MCP_BINARY}{}", std::env::consts::EXE_SUFFIX))
}

super::traits::context_handler!(InstallHandler);
