//! CLI argument parsing using clap

use crate::config::{Config, OutputFormat};
use crate::error::{Result, ScopeError};
use clap::Parser;
use std::path::PathBuf;

/// List files changed since the current branch diverged from a base branch
#[derive(Parser, Debug)]
#[command(name = "branch-scope")]
#[command(version)]
#[command(about = "Find files touched on the current branch", long_about = None)]
pub struct Cli {
    /// Directory to traverse
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output file for results (use "-" for stdout)
    #[arg(value_name = "OUTPUT", default_value = "-")]
    pub output: String,

    /// Base branch to diff against (auto-detected if omitted)
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments into a Config
    pub fn into_config(self) -> Result<Config> {
        if let Some(branch) = &self.branch {
            if branch.trim().is_empty() {
                return Err(ScopeError::InvalidConfig(
                    "branch name must not be empty".to_string(),
                ));
            }
        }

        // Canonicalize up front so every path the traversal yields is absolute
        let start_dir = match std::fs::canonicalize(&self.path) {
            Ok(dir) if dir.is_dir() => dir,
            _ => {
                return Err(ScopeError::InvalidConfig(format!(
                    "'{}' is not a readable directory",
                    self.path.display()
                )))
            }
        };

        let output_format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Console
        };

        Ok(Config {
            branch: self.branch,
            start_dir,
            output_format,
            output_filename: self.output,
        })
    }
}
