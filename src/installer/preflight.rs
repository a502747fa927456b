//! Pre-flight checks for install and test

use crate::errors::{AppError, AppResult};
use std::env;
use std::path::{Path, PathBuf};

pub const HOST_CLI: &str = "claude";

/// Only macOS has the notification tooling the hooks rely on
pub fn check_platform() -> AppResult<()> {
    check_platform_name(env::consts::OS)
}

fn check_platform_name(os: &str) -> AppResult<()> {
    if os == "macos" {
        Ok(())
    } else {
        Err(AppError::UnsupportedPlatform {
            platform: os.to_string(),
        })
    }
}

/// Locate the host CLI on PATH
pub fn check_host_cli() -> AppResult<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    find_in_path(HOST_CLI, env::split_paths(&path)).ok_or_else(|| AppError::HostCliMissing {
        cli: "Claude Code".to_string(),
    })
}

fn find_in_path(name: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
