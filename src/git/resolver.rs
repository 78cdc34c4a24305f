//! Repository discovery and branch divergence resolution
//!
//! Finds the repository enclosing a directory and computes the set of
//! files that changed between the repository's HEAD and the point where
//! the current history diverged from a target branch.

use crate::error::{Result, ScopeError};
use crate::git::process::GitRunner;
use crate::predicate::ChangeSet;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Get the canonical root directory of the enclosing git repository
pub fn repo_root(runner: &dyn GitRunner, start_dir: &Path) -> Result<PathBuf> {
    let out = runner.run(start_dir, &["rev-parse", "--show-toplevel"])?;
    if !out.success {
        return Err(ScopeError::NotGitRepo {
            path: start_dir.display().to_string(),
        });
    }

    Ok(std::fs::canonicalize(out.trimmed())?)
}

/// Detect the default base branch (tries main, master, develop in order)
pub fn detect_base_branch(runner: &dyn GitRunner, start_dir: &Path) -> Result<String> {
    for branch in ["main", "master", "develop"] {
        let refspec = format!("refs/heads/{}", branch);
        let out = runner.run(start_dir, &["rev-parse", "--verify", "--quiet", &refspec])?;
        if out.success {
            return Ok(branch.to_string());
        }
    }

    // Fallback: the branch the remote HEAD points at, e.g. "origin/main"
    let out = runner.run(
        start_dir,
        &["symbolic-ref", "refs/remotes/origin/HEAD", "--short"],
    )?;
    if out.success {
        if let Some(branch) = out.trimmed().split('/').last() {
            return Ok(branch.to_string());
        }
    }

    Err(ScopeError::NoBaseBranch)
}

/// Resolve one repository against the target branch.
///
/// Returns the canonical repository root together with the set of paths
/// that differ between the divergence point and HEAD. A repository with
/// no commits resolves to [`ChangeSet::Empty`]. A branch that cannot be
/// resolved, or one sharing no history with HEAD, is reported as a
/// warning and resolves to [`ChangeSet::Unresolved`].
pub fn resolve(
    runner: &dyn GitRunner,
    start_dir: &Path,
    branch: &str,
) -> Result<(PathBuf, ChangeSet)> {
    let root = repo_root(runner, start_dir)?;

    // An unborn HEAD has nothing to diverge from
    let head = runner.run(&root, &["rev-parse", "--verify", "--quiet", "HEAD"])?;
    if !head.success {
        return Ok((root, ChangeSet::Empty));
    }

    let bases = runner.run(&root, &["merge-base", "--all", "HEAD", branch])?;
    if !bases.success {
        warn!(
            "Failed to find merge base with '{}': {}",
            branch,
            bases.stderr.trim()
        );
        return Ok((root, ChangeSet::Unresolved));
    }

    // Several merge bases may be reported; the first one wins
    let base = match bases.stdout.lines().map(str::trim).find(|l| !l.is_empty()) {
        Some(base) => base.to_string(),
        None => {
            warn!("Failed to find merge base with '{}'", branch);
            return Ok((root, ChangeSet::Unresolved));
        }
    };

    let diff = runner.run(&root, &["diff", "--name-status", &base, "HEAD"])?;
    if !diff.success {
        return Err(ScopeError::GitCommand {
            context: format!("diff --name-status {} HEAD", base),
            stderr: diff.stderr.trim().to_string(),
        });
    }

    let changed = parse_name_status(&diff.stdout, &root);
    Ok((root, ChangeSet::Changed(changed)))
}

/// Parse `git diff --name-status` output into absolute changed paths.
///
/// Deletions are dropped: a deleted file can never be visited by a
/// traversal. Rename and copy records carry the old and new path; only
/// the destination survives, and the similarity score git appends to the
/// status letter is ignored.
fn parse_name_status(output: &str, root: &Path) -> HashSet<PathBuf> {
    let mut changed = HashSet::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let path = match fields[0].chars().next() {
            Some('A' | 'M' | 'T') if fields.len() >= 2 => fields[1],
            Some('R' | 'C') if fields.len() >= 3 => fields[fields.len() - 1],
            Some('D') => continue,
            _ => {
                debug!("Skipping unrecognized diff record: {:?}", line);
                continue;
            }
        };

        changed.insert(root.join(path));
    }

    changed
}
