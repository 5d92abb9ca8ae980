//! Scaffold Executor - the only component with side effects.
//!
//! Materializes a [`ScaffoldPlan`] against a [`Filesystem`] port in three
//! strictly ordered steps, each a hard precondition for the next:
//!
//! 1. **Preflight** — the target root must not exist; otherwise fail with
//!    [`ApplicationError::ProjectExists`] before any mutation.
//! 2. **Directories** — create the root, then each planned directory in
//!    plan order.
//! 3. **Files** — write each artifact in plan order, full-content creates.
//!
//! Any failure aborts immediately and is terminal for the invocation: no
//! retry, no rollback.  Entries created before the failure are left in
//! place, and a re-run will fail preflight because the root now exists —
//! a known, accepted inconsistency.
//!
//! The preflight check and the subsequent creation are not atomic (TOCTOU):
//! two concurrent invocations targeting the same root may both pass the
//! check.  Accepted limitation, not a guarantee.

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::ScaffoldPlan,
    error::{NodeforgeError, NodeforgeResult},
};

use super::ApplicationError;

/// Executes scaffold plans against an injected filesystem.
pub struct ScaffoldExecutor {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldExecutor {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Materialize `plan`.  Returns once every directory and file exists
    /// with the planned content.
    #[instrument(skip_all, fields(root = %plan.root().display()))]
    pub fn execute(&self, plan: &ScaffoldPlan) -> NodeforgeResult<()> {
        plan.validate().map_err(NodeforgeError::Domain)?;

        // 1. Preflight: no partial mutation before this check.
        let root = plan.root();
        if self.filesystem.exists(root) {
            return Err(ApplicationError::ProjectExists { path: root.clone() }.into());
        }

        // 2. Directory creation, plan order.
        self.filesystem.create_dir_all(root)?;
        for dir in plan.directories() {
            self.filesystem.create_dir_all(&root.join(dir))?;
        }

        // 3. File writes, plan order.
        for file in plan.files() {
            self.filesystem.write_file(&root.join(&file.path), &file.content)?;
        }

        info!(entries = plan.entry_count(), "scaffold completed");
        Ok(())
    }
}

// Unit tests live in `nodeforge-adapters` (executor_tests.rs) where the
// in-memory filesystem adapter is available; this crate cannot depend on
// its own adapters.
