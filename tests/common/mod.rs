//! Shared setup for binary tests
//!
//! Every command runs against a throwaway Claude config directory so tests
//! never touch the real `~/.claude`.

#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CLI: &str = "ccnotify";
pub const MCP: &str = "ccnotify-mcp";

/// Isolated Claude config directory
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir"),
        }
    }

    pub fn claude_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("cat-ccnotify")
    }

    pub fn hooks_config(&self) -> PathBuf {
        self.dir.path().join("hooks.json")
    }

    pub fn host_settings(&self) -> PathBuf {
        self.dir.path().join("settings.json")
    }

    /// Write `config.toml` into the data directory
    pub fn write_settings(&self, toml: &str) {
        std::fs::create_dir_all(self.data_dir()).expect("data dir");
        std::fs::write(self.data_dir().join("config.toml"), toml).expect("settings");
    }

    /// `bin` with `--claude-dir` pointing here and a clean environment
    pub fn cmd(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("binary built");
        cmd.env_remove("CLAUDE_CONFIG_DIR")
            .env_remove("CAT_CCNOTIFY_DEBUG")
            .env_remove("CAT_CCNOTIFY_SOUND")
            .env_remove("RUST_LOG")
            .arg("--claude-dir")
            .arg(self.claude_dir());
        cmd
    }

    /// Run the CLI with `args`, feeding `stdin`
    pub fn run(&self, args: &[&str], stdin: &str) -> Assert {
        self.cmd(CLI).args(args).write_stdin(stdin.to_string()).assert()
    }
}

/// Newline-delimited JSON-RPC replies from a finished run
pub fn replies(assert: Assert) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&assert.get_output().stdout)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("reply is JSON"))
        .collect()
}
