//! Per-traversal change cache

use crate::error::Result;
use crate::git::{resolve, GitRunner};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Outcome of resolving one repository against the target branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSet {
    /// Absolute paths differing between the divergence point and HEAD
    Changed(HashSet<PathBuf>),
    /// Repository has no commits yet
    Empty,
    /// Target branch missing or no merge base; warned, matches nothing
    Unresolved,
}

impl ChangeSet {
    /// Whether `path` is a member of this change set
    pub fn contains(&self, path: &Path) -> bool {
        match self {
            ChangeSet::Changed(paths) => paths.contains(path),
            ChangeSet::Empty | ChangeSet::Unresolved => false,
        }
    }
}

/// Per-traversal memo of resolved repositories.
///
/// Keyed by canonical repository root. The directory map lets files skip
/// the root lookup entirely once any of their ancestor directories has
/// been seen, so sibling files in one repository never re-invoke git.
/// Must be cleared between traversals.
#[derive(Debug, Default)]
pub struct ChangeCache {
    roots: HashMap<PathBuf, ChangeSet>,
    dir_roots: HashMap<PathBuf, PathBuf>,
}

impl ChangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard all resolved repositories
    pub fn clear(&mut self) {
        self.roots.clear();
        self.dir_roots.clear();
    }

    /// True iff `candidate` changed since its repository diverged from `branch`.
    ///
    /// Resolves the enclosing repository on first contact and reuses the
    /// stored change set for every later file under the same root.
    pub fn member(
        &mut self,
        runner: &dyn GitRunner,
        candidate: &Path,
        branch: &str,
    ) -> Result<bool> {
        let candidate = std::fs::canonicalize(candidate)?;
        let dir = match candidate.parent() {
            Some(parent) => parent.to_path_buf(),
            None => candidate.clone(),
        };

        let root = match self.known_root(&dir) {
            Some(root) => root,
            None => {
                let (root, changes) = resolve(runner, &dir, branch)?;
                self.dir_roots.insert(root.clone(), root.clone());
                self.roots.entry(root.clone()).or_insert(changes);
                root
            }
        };
        self.dir_roots.insert(dir, root.clone());

        Ok(self.roots[&root].contains(&candidate))
    }

    /// Walk `dir` and its ancestors through the directory memo
    fn known_root(&self, dir: &Path) -> Option<PathBuf> {
        dir.ancestors().find_map(|a| self.dir_roots.get(a)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::GitOutput;
    use std::cell::Cell;
    use std::fs;
    use std::rc::Rc;

    /// Scripted repository: answers like a repo rooted at `root` where
    /// `changed` is the diff against any branch, counting resolutions.
    struct FakeRepo {
        root: PathBuf,
        changed: Vec<&'static str>,
        resolutions: Rc<Cell<usize>>,
    }

    impl GitRunner for FakeRepo {
        fn run(&self, _workdir: &Path, args: &[&str]) -> Result<GitOutput> {
            let (stdout, success) = match args {
                ["rev-parse", "--show-toplevel"] => (self.root.display().to_string(), true),
                ["rev-parse", "--verify", "--quiet", "HEAD"] => ("abc123".to_string(), true),
                ["merge-base", ..] => {
                    self.resolutions.set(self.resolutions.get() + 1);
                    ("base1".to_string(), true)
                }
                ["diff", ..] => {
                    let listing = self
                        .changed
                        .iter()
                        .map(|p| format!("A\t{}", p))
                        .collect::<Vec<_>>()
                        .join("\n");
                    (listing, true)
                }
                _ => panic!("unexpected git invocation: {:?}", args),
            };

            Ok(GitOutput {
                stdout,
                stderr: String::new(),
                success,
            })
        }
    }

    fn fake_repo(changed: Vec<&'static str>) -> (tempfile::TempDir, FakeRepo, Rc<Cell<usize>>) {
        let temp = tempfile::tempdir().unwrap();
        let resolutions = Rc::new(Cell::new(0));
        let repo = FakeRepo {
            root: temp.path().to_path_buf(),
            changed,
            resolutions: Rc::clone(&resolutions),
        };
        (temp, repo, resolutions)
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "x").unwrap();
        path
    }

    #[test]
    fn test_change_set_membership() {
        let paths: HashSet<PathBuf> = [PathBuf::from("/repo/a.c")].into_iter().collect();
        let changed = ChangeSet::Changed(paths);

        assert!(changed.contains(Path::new("/repo/a.c")));
        assert!(!changed.contains(Path::new("/repo/b.c")));
        assert!(!ChangeSet::Empty.contains(Path::new("/repo/a.c")));
        assert!(!ChangeSet::Unresolved.contains(Path::new("/repo/a.c")));
    }

    #[test]
    fn test_member_reports_changed_files() {
        let (temp, repo, _) = fake_repo(vec!["src/new.c"]);
        let hit = touch(temp.path(), "src/new.c");
        let miss = touch(temp.path(), "src/old.c");

        let mut cache = ChangeCache::new();
        assert!(cache.member(&repo, &hit, "main").unwrap());
        assert!(!cache.member(&repo, &miss, "main").unwrap());
    }

    #[test]
    fn test_one_resolution_per_repository() {
        let (temp, repo, resolutions) = fake_repo(vec!["src/new.c"]);
        let files = [
            touch(temp.path(), "src/new.c"),
            touch(temp.path(), "src/old.c"),
            touch(temp.path(), "docs/deep/nested/readme.c"),
            touch(temp.path(), "top.c"),
        ];

        let mut cache = ChangeCache::new();
        for file in &files {
            cache.member(&repo, file, "main").unwrap();
        }

        assert_eq!(resolutions.get(), 1);
    }

    #[test]
    fn test_clear_forces_re_resolution() {
        let (temp, repo, resolutions) = fake_repo(vec![]);
        let file = touch(temp.path(), "a.c");

        let mut cache = ChangeCache::new();
        cache.member(&repo, &file, "main").unwrap();
        cache.clear();
        cache.member(&repo, &file, "main").unwrap();

        assert_eq!(resolutions.get(), 2);
    }
}
