//! branch-scope - restrict file traversals to branch-touched files
//!
//! Answers one question for every file a traversal visits: has this file
//! changed since the current branch diverged from a named base branch?
//! The answer is exposed as a [`TraversalPredicate`] that a file-finding
//! engine evaluates per visited file, backed by a per-traversal cache so
//! git is consulted at most once per repository.
//!
//! # Public API
//! - [`ChangedSinceDivergence`]: the branch-divergence predicate
//! - [`TraversalPredicate`]: the rule interface a traversal engine consumes
//! - [`GitRunner`] / [`SystemGit`]: subprocess capability, injectable in tests
//! - [`find_matching`]: a minimal traversal harness driving a predicate chain

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod git;
pub mod predicate;
pub mod walk;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
pub use error::{Result, ScopeError};
pub use export::{create_exporter, get_output_writer, ConsoleExporter, Exporter, JsonExporter};
pub use git::{detect_base_branch, repo_root, resolve, GitOutput, GitRunner, SystemGit};
pub use predicate::{ChangeCache, ChangeSet, ChangedSinceDivergence, TraversalPredicate};
pub use walk::find_matching;
