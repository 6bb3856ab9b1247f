//! # fauxdit-git
//!
//! **Tier 2 (Utilities)**
//!
//! Repository metadata lookup for fauxdit reports. Asks the local `git`
//! binary for the current commit and branch; every failure mode degrades to
//! a fallback value, so report metadata is always present.
//!
//! ## What belongs here
//! * Commit / branch porcelain queries
//! * Deterministic fallback values
//!
//! ## What does NOT belong here
//! * History analysis
//! * Anything that can surface an error to the caller

use std::path::Path;
use std::process::{Command, Stdio};

/// Create a `Command` for git with process-environment isolation.
///
/// Strips `GIT_DIR` and `GIT_WORK_TREE` so that inherited environment
/// variables cannot override the explicit `-C` path.
fn git_cmd() -> Command {
    let mut cmd = Command::new("git");
    cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
    cmd
}

/// HEAD commit of the repository at `path`.
///
/// Falls back to a 12-character hash of the path string when git is
/// unavailable, the path is not a repository, or the output is empty.
pub fn head_commit(path: &Path) -> String {
    git_output(path, &["rev-parse", "HEAD"]).unwrap_or_else(|| fallback_commit(path))
}

/// Current branch of the repository at `path`, or `"main"`.
///
/// Detached HEAD prints an empty branch name; that counts as a failure and
/// takes the fallback too.
pub fn current_branch(path: &Path) -> String {
    git_output(path, &["branch", "--show-current"]).unwrap_or_else(|| "main".to_string())
}

/// Deterministic substitute commit id: the first 12 hex characters of
/// `blake3(path)`.
pub fn fallback_commit(path: &Path) -> String {
    let digest = blake3::hash(path.to_string_lossy().as_bytes());
    let hex = digest.to_hex();
    hex[..12].to_string()
}

fn git_output(path: &Path, args: &[&str]) -> Option<String> {
    let output = git_cmd()
        .arg("-C")
        .arg(path)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if value.is_empty() { None } else { Some(value) }
}
