//! branch-scope - list files changed since branch divergence
//!
//! Walks a directory tree and prints the files that changed since the
//! current branch diverged from a base branch, for feeding style
//! checkers and coverage tools only the files touched on the branch.

use branch_scope::{
    create_exporter, detect_base_branch, find_matching, get_output_writer, ChangedSinceDivergence,
    Cli, SystemGit, TraversalPredicate,
};
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let cli = Cli::parse();
    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 1: Pick the base branch ===
    let branch = match &config.branch {
        Some(branch) => branch.clone(),
        None => match detect_base_branch(&SystemGit, &config.start_dir) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        },
    };

    // === Phase 2: Traverse ===
    let mut predicates: Vec<Box<dyn TraversalPredicate>> =
        vec![Box::new(ChangedSinceDivergence::new(branch.clone()))];
    let matches = match find_matching(&config.start_dir, &mut predicates) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    // === Phase 3: Export ===
    let exporter = create_exporter(config.output_format);
    let mut writer = match get_output_writer(&config.output_filename) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error creating output: {}", e);
            return ExitCode::from(2);
        }
    };

    if let Err(e) = exporter.export(&matches, &branch, &config, &mut *writer) {
        eprintln!("Error writing output: {}", e);
        return ExitCode::from(2);
    }

    if let Err(e) = writer.flush() {
        eprintln!("Error flushing output: {}", e);
        return ExitCode::from(2);
    }

    ExitCode::SUCCESS
}
