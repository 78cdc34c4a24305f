//! Error types for branch-scope

use thiserror::Error;

/// Result type alias for branch-scope operations
pub type Result<T> = std::result::Result<T, ScopeError>;

/// Error types for branch-scope operations
#[derive(Error, Debug)]
pub enum ScopeError {
    /// Starting path is not inside a git repository
    #[error("Not a git repository (or any parent directory): '{path}'")]
    NotGitRepo { path: String },

    /// Git could not be spawned, or exited non-zero outside the expected cases
    #[error("git {context} failed: {stderr}")]
    GitCommand { context: String, stderr: String },

    /// No base branch could be detected
    #[error("Could not detect a base branch. Use --branch to specify one.")]
    NoBaseBranch,

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_git_repo_names_the_path() {
        let err = ScopeError::NotGitRepo {
            path: "/some/dir".to_string(),
        };
        assert!(err.to_string().contains("git repository"));
        assert!(err.to_string().contains("/some/dir"));
    }

    #[test]
    fn test_git_command_carries_stderr() {
        let err = ScopeError::GitCommand {
            context: "diff".to_string(),
            stderr: "fatal: bad revision".to_string(),
        };
        assert!(err.to_string().contains("diff"));
        assert!(err.to_string().contains("fatal: bad revision"));
    }
}
