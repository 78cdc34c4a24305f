//! Subprocess access to the git binary

use crate::error::{Result, ScopeError};
use std::path::Path;
use std::process::Command;

/// Captured result of one git invocation
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Whether the process exited with status zero
    pub success: bool,
}

impl GitOutput {
    /// Standard output with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Capability to run git subcommands scoped to a working directory.
///
/// The working directory is passed per invocation and applies only to the
/// spawned child process; the process-wide current directory is never
/// touched, so callers may hold other directory-relative state across
/// calls.
pub trait GitRunner {
    /// Run `git <args>` with the child's working directory set to `workdir`
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<GitOutput>;
}

/// Runs the real `git` binary found on PATH
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, workdir: &Path, args: &[&str]) -> Result<GitOutput> {
        let output = Command::new("git")
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| ScopeError::GitCommand {
                context: args.first().copied().unwrap_or_default().to_string(),
                stderr: format!("failed to run git: {}", e),
            })?;

        Ok(GitOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        })
    }
}
