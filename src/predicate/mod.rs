//! Traversal predicates
//!
//! The narrow interface a file-finding engine uses to consume matching
//! rules, and the branch-divergence predicate built on it.

mod cache;

pub use cache::{ChangeCache, ChangeSet};

use crate::error::Result;
use crate::git::{GitRunner, SystemGit};
use std::path::Path;

/// Boolean rule evaluated against every file a traversal visits.
///
/// A traversal engine calls [`begin_traversal`](Self::begin_traversal)
/// once before the walk, [`matches`](Self::matches) once per visited
/// file in no particular order, and
/// [`end_traversal`](Self::end_traversal) once after. State must not
/// leak from one traversal into the next.
pub trait TraversalPredicate {
    /// Called once before a traversal starts
    fn begin_traversal(&mut self) {}

    /// True iff `path` passes this rule
    fn matches(&mut self, path: &Path) -> Result<bool>;

    /// Called once after a traversal ends
    fn end_traversal(&mut self) {}
}

/// Matches files that changed since the current branch diverged from a
/// target branch.
///
/// The change set is computed once per repository per traversal and held
/// in a cache owned by this instance; `begin_traversal` discards it, so
/// a predicate reattached to a new traversal never reuses stale results.
///
/// The target may be a branch, a remote-qualified branch, a tag, or any
/// commit-ish. With a detached HEAD, pass a fully qualified ref (for
/// example `origin/main`); no qualification is guessed.
pub struct ChangedSinceDivergence<R: GitRunner = SystemGit> {
    branch: String,
    runner: R,
    cache: ChangeCache,
}

impl ChangedSinceDivergence<SystemGit> {
    /// Create a predicate comparing against `branch` using the system git binary
    pub fn new(branch: impl Into<String>) -> Self {
        Self::with_runner(branch, SystemGit)
    }
}

impl<R: GitRunner> ChangedSinceDivergence<R> {
    /// Create a predicate with a custom git runner
    pub fn with_runner(branch: impl Into<String>, runner: R) -> Self {
        Self {
            branch: branch.into(),
            runner,
            cache: ChangeCache::new(),
        }
    }

    /// The target branch this predicate compares against
    pub fn branch(&self) -> &str {
        &self.branch
    }
}

impl<R: GitRunner> TraversalPredicate for ChangedSinceDivergence<R> {
    fn begin_traversal(&mut self) {
        self.cache.clear();
    }

    fn matches(&mut self, path: &Path) -> Result<bool> {
        self.cache.member(&self.runner, path, &self.branch)
    }
}
