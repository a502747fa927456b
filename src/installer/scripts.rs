//! Hook wrapper scripts
//!
//! The host application runs hooks by path, so each event gets a tiny shell
//! script that execs this binary with the right subcommand.

use crate::errors::{AppResult, IoResultExt};
use crate::hooks::HookEvent;
use std::fs;
use std::path::{Path, PathBuf};

/// Paths of the installed wrapper scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookScripts {
    pub notification: PathBuf,
    pub stop: PathBuf,
}

impl HookScripts {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            notification: script_path(dir, HookEvent::Notification),
            stop: script_path(dir, HookEvent::Stop),
        }
    }
}

pub fn script_path(dir: &Path, event: HookEvent) -> PathBuf {
    dir.join(format!("{}.sh", event.component()))
}

/// Quote a value for use inside double quotes in sh
fn sh_double_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Script body that forwards stdin and arguments to `exe hook <event>`
pub fn script_body(exe: &Path, event: HookEvent) -> String {
    format!(
        "#!/bin/sh\n# cat-ccnotify {} hook\nexec {} hook {} \"$@\"\n",
        event,
        sh_double_quote(&exe.display().to_string()),
        event
    )
}

/// Write both wrapper scripts into `dir` and mark them executable
pub fn write_hook_scripts(dir: &Path, exe: &Path) -> AppResult<HookScripts> {
    fs::create_dir_all(dir).in_file_operation(dir, "create hook script directory")?;

    let scripts = HookScripts::in_dir(dir);
    for (event, path) in [
        (HookEvent::Notification, &scripts.notification),
        (HookEvent::Stop, &scripts.stop),
    ] {
        fs::write(path, script_body(exe, event)).in_file_operation(path, "write hook script")?;
        make_executable(path)?;
    }

    Ok(scripts)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> AppResult<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .in_file_operation(path, "make hook script executable")
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> AppResult<()> {
    Ok(())
}
