//! Directory traversal harness
//!
//! Stands in for a host file-finding engine: walks a tree and evaluates
//! a chain of predicates against every file, keeping the files on which
//! every predicate agrees.

use crate::error::Result;
use crate::predicate::TraversalPredicate;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Walk files under `start` and return those matching every predicate.
///
/// The walk is gitignore-aware and visits files in path order. Predicate
/// setup and teardown hooks bracket the walk; a predicate error aborts
/// the traversal.
pub fn find_matching(
    start: &Path,
    predicates: &mut [Box<dyn TraversalPredicate>],
) -> Result<Vec<PathBuf>> {
    for predicate in predicates.iter_mut() {
        predicate.begin_traversal();
    }

    let mut matches = Vec::new();
    let walker = WalkBuilder::new(start)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }

        let path = entry.path();
        let mut keep = true;
        for predicate in predicates.iter_mut() {
            if !predicate.matches(path)? {
                keep = false;
                break;
            }
        }
        if keep {
            matches.push(path.to_path_buf());
        }
    }

    for predicate in predicates.iter_mut() {
        predicate.end_traversal();
    }

    Ok(matches)
}
