//! Git integration
//!
//! Subprocess plumbing for the git binary plus the divergence resolver
//! built on top of it. All invocations are scoped to an explicit working
//! directory through [`GitRunner`].

mod process;
mod resolver;

pub use process::{GitOutput, GitRunner, SystemGit};
pub use resolver::{detect_base_branch, repo_root, resolve};
