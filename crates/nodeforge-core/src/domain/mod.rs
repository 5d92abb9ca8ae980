//! Core domain layer for Nodeforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: `ProjectSpec` and `ScaffoldPlan` are built once
//!   per invocation and never mutated afterwards

// Public API - what the world sees
pub mod context;
pub mod error;
pub mod plan;
pub mod spec;

// Re-exports for convenience
pub use context::RenderContext;
pub use error::{DomainError, ErrorCategory};
pub use plan::{FileArtifact, ScaffoldPlan};
pub use spec::{Language, ProjectSpec};

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Language Tests
    // ========================================================================

    #[test]
    fn language_parses_correctly() {
        assert_eq!(Language::from_str("javascript").unwrap(), Language::JavaScript);
        assert_eq!(Language::from_str("JS").unwrap(), Language::JavaScript);
        assert_eq!(Language::from_str("ts").unwrap(), Language::TypeScript);
        assert!(Language::from_str("cobol").is_err());
    }

    #[test]
    fn language_display_round_trips() {
        for lang in [Language::JavaScript, Language::TypeScript] {
            assert_eq!(Language::from_str(&lang.to_string()).unwrap(), lang);
        }
    }

    // ========================================================================
    // ProjectSpec Tests
    // ========================================================================

    #[test]
    fn spec_accepts_valid_names() {
        for name in ["demo-api", "my_app", "Server123", "x"] {
            assert!(ProjectSpec::new(name, Language::JavaScript).is_ok(), "failed for {name}");
        }
    }

    #[test]
    fn spec_rejects_empty_name() {
        assert!(matches!(
            ProjectSpec::new("", Language::JavaScript),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn spec_rejects_whitespace_only_name() {
        assert!(ProjectSpec::new("   ", Language::JavaScript).is_err());
    }

    #[test]
    fn spec_rejects_path_separators() {
        assert!(ProjectSpec::new("a/b", Language::JavaScript).is_err());
        assert!(ProjectSpec::new("a\\b", Language::JavaScript).is_err());
    }

    #[test]
    fn spec_rejects_dotfile_names() {
        assert!(ProjectSpec::new(".hidden", Language::JavaScript).is_err());
        assert!(ProjectSpec::new("..", Language::JavaScript).is_err());
    }

    // ========================================================================
    // RenderContext Tests
    // ========================================================================

    #[test]
    fn render_context_substitutes_name() {
        let ctx = RenderContext::new("demo-api");
        assert_eq!(ctx.render("# {{PROJECT_NAME}}"), "# demo-api");
    }

    #[test]
    fn render_context_replaces_all_occurrences() {
        let ctx = RenderContext::new("x");
        assert_eq!(ctx.render("{{PROJECT_NAME}}/{{PROJECT_NAME}}"), "x/x");
    }

    #[test]
    fn render_context_leaves_unknown_placeholders() {
        let ctx = RenderContext::new("x");
        assert_eq!(ctx.render("{{UNKNOWN}}"), "{{UNKNOWN}}");
    }

    // ========================================================================
    // ScaffoldPlan Tests
    // ========================================================================

    fn sample_plan() -> ScaffoldPlan {
        ScaffoldPlan::new("demo-api")
            .with_directory("src")
            .with_file("src/app.js", "content".into())
    }

    #[test]
    fn plan_collects_entries_in_order() {
        let plan = sample_plan();
        assert_eq!(plan.directories().count(), 1);
        assert_eq!(plan.files().count(), 1);
        assert_eq!(plan.root(), &PathBuf::from("demo-api"));
    }

    #[test]
    fn plan_validates_ok() {
        assert!(sample_plan().validate().is_ok());
    }

    #[test]
    fn plan_rejects_empty() {
        assert!(matches!(
            ScaffoldPlan::new("demo-api").validate(),
            Err(DomainError::EmptyPlan)
        ));
    }

    #[test]
    fn plan_rejects_duplicate_paths() {
        let plan = ScaffoldPlan::new("demo-api")
            .with_directory("src")
            .with_file("src/app.js", "a".into())
            .with_file("src/app.js", "b".into());
        assert!(matches!(plan.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn plan_rejects_absolute_paths() {
        let plan = ScaffoldPlan::new("demo-api").with_file("/etc/passwd", "".into());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn plan_rejects_file_without_parent_directory() {
        // src/controllers was never declared, so the file is unreachable
        // at execution time.
        let plan = ScaffoldPlan::new("demo-api")
            .with_directory("src")
            .with_file("src/controllers/user.js", "".into());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::MissingParentDirectory { .. })
        ));
    }

    #[test]
    fn plan_accepts_root_level_files() {
        let plan = ScaffoldPlan::new("demo-api").with_file("server.js", "".into());
        assert!(plan.validate().is_ok());
    }

    #[test]
    fn plan_rejects_child_directory_before_parent() {
        // Executor creates directories in plan order; a child listed before
        // its parent would fail at execution time.
        let plan = ScaffoldPlan::new("demo-api")
            .with_directory("src/controllers")
            .with_directory("src")
            .with_file("src/app.js", "".into());
        assert!(matches!(
            plan.validate(),
            Err(DomainError::MissingParentDirectory { .. })
        ));
    }
}
