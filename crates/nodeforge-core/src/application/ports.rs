//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `nodeforge-adapters` crate provides implementations.

use std::path::Path;

use crate::error::NodeforgeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nodeforge_adapters::filesystem::LocalFilesystem` (production)
/// - `nodeforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The executor is the only caller and the only component with side
/// effects; the surface is deliberately small — create, write, probe.
/// There is no remove operation because a failed scaffold is never rolled
/// back (accepted limitation).
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NodeforgeResult<()>;

    /// Write content to a file (full-content create, never append).
    fn write_file(&self, path: &Path, content: &str) -> NodeforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
