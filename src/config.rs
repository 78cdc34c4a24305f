//! Configuration types for branch-scope

use std::path::PathBuf;

/// Output format for matched files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One path per line
    #[default]
    Console,
    /// JSON document with a summary
    Json,
}

/// Configuration options for one branch-scope run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base branch to diff against (auto-detected when None)
    pub branch: Option<String>,

    /// Directory the traversal starts from
    pub start_dir: PathBuf,

    /// Output format (console or json)
    pub output_format: OutputFormat,

    /// Path to output file (or "-" for stdout)
    pub output_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            branch: None,
            start_dir: PathBuf::from("."),
            output_format: OutputFormat::Console,
            output_filename: String::from("-"),
        }
    }
}
