//! The deterministic, side-effect-free description of what to materialize.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// A single planned file: relative path + fully rendered content.
///
/// Content is resolved at planning time; the executor performs no rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl FileArtifact {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Ordered scaffold plan: directories first, then files.
///
/// Fully computed before any I/O occurs.  The plan is the output of the
/// planning phase and the sole input to the executor; it contains no
/// business logic, only data.
///
/// Invariants (checked by [`ScaffoldPlan::validate`]):
/// - at least one entry
/// - no duplicate paths
/// - no absolute paths (everything is relative to `root`)
/// - every directory's parent is the root or appears earlier in
///   `directories`; every file's parent is the root or appears in
///   `directories` — so entries are creatable strictly in plan order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    root: PathBuf,
    directories: Vec<PathBuf>,
    files: Vec<FileArtifact>,
}

impl ScaffoldPlan {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            directories: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.directories.push(path.into());
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.files.push(FileArtifact {
            path: path.into(),
            content,
        });
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.add_file(path, content);
        self
    }

    /// Project root the plan materializes into (e.g. `./demo-api`).
    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Directories in creation order (parents before children).
    pub fn directories(&self) -> impl Iterator<Item = &PathBuf> {
        self.directories.iter()
    }

    /// Files in write order.
    pub fn files(&self) -> impl Iterator<Item = &FileArtifact> {
        self.files.iter()
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len() + self.files.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.directories.is_empty() && self.files.is_empty() {
            return Err(DomainError::EmptyPlan);
        }

        let mut seen: HashSet<&Path> = HashSet::new();
        let mut created: HashSet<&Path> = HashSet::new();

        for dir in &self.directories {
            check_relative(dir)?;
            if !seen.insert(dir) {
                return Err(DomainError::DuplicatePath {
                    path: dir.display().to_string(),
                });
            }
            if !parent_available(dir, &created) {
                return Err(DomainError::MissingParentDirectory {
                    path: dir.display().to_string(),
                });
            }
            created.insert(dir);
        }

        for file in &self.files {
            check_relative(&file.path)?;
            if !seen.insert(&file.path) {
                return Err(DomainError::DuplicatePath {
                    path: file.path.display().to_string(),
                });
            }
            if !parent_available(&file.path, &created) {
                return Err(DomainError::MissingParentDirectory {
                    path: file.path.display().to_string(),
                });
            }
        }

        Ok(())
    }
}

fn check_relative(path: &Path) -> Result<(), DomainError> {
    if path.is_absolute() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// A parent of `path` is "available" when it is the plan root (empty
/// relative path) or a directory already recorded as created.
fn parent_available(path: &Path, created: &HashSet<&Path>) -> bool {
    match path.parent() {
        None => true,
        Some(p) if p.as_os_str().is_empty() => true,
        Some(p) => created.contains(p),
    }
}
