//! Scaffold Planner - pure planning phase.
//!
//! Turns a validated [`ProjectSpec`] into an ordered [`ScaffoldPlan`] by
//! consulting the template catalog.  Total and deterministic: identical
//! specs always yield byte-identical plans.  No I/O happens here.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    catalog,
    domain::{ProjectSpec, RenderContext, ScaffoldPlan, spec::validate_name},
    error::{NodeforgeError, NodeforgeResult},
};

/// Stateless planning service.
pub struct ScaffoldPlanner;

impl ScaffoldPlanner {
    /// Compute the scaffold plan for `spec`, rooted at
    /// `output_dir/<project name>`.
    ///
    /// Order is topologically safe: the fixed directory list (parents before
    /// children) first, then the file artifacts with the project name
    /// substituted into every template.
    ///
    /// Fails only if `spec.name()` violates the path-segment invariant —
    /// defense in depth, the CLI is expected to have validated already.
    #[instrument(skip_all, fields(spec = %spec))]
    pub fn plan(spec: &ProjectSpec, output_dir: impl AsRef<Path>) -> NodeforgeResult<ScaffoldPlan> {
        validate_name(spec.name()).map_err(NodeforgeError::Domain)?;

        let root = output_dir.as_ref().join(spec.name());
        let context = RenderContext::new(spec.name());
        let mut plan = ScaffoldPlan::new(root);

        for dir in catalog::directories(spec.language()) {
            plan.add_directory(dir);
        }

        for template in catalog::files(spec.language()) {
            plan.add_file(template.path, context.render(template.content));
        }

        // The catalog is trusted data, but a broken entry (duplicate path,
        // file outside the planned directories) should surface here, not at
        // execution time.
        plan.validate().map_err(NodeforgeError::Domain)?;

        debug!(entries = plan.entry_count(), root = %plan.root().display(), "plan computed");
        Ok(plan)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, Language};
    use std::path::PathBuf;

    fn spec(name: &str, lang: Language) -> ProjectSpec {
        ProjectSpec::new(name, lang).unwrap()
    }

    #[test]
    fn plan_is_deterministic() {
        let s = spec("demo-api", Language::JavaScript);
        let a = ScaffoldPlanner::plan(&s, ".").unwrap();
        let b = ScaffoldPlanner::plan(&s, ".").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn plan_roots_under_output_dir() {
        let s = spec("demo-api", Language::JavaScript);
        let plan = ScaffoldPlanner::plan(&s, "/tmp/out").unwrap();
        assert_eq!(plan.root(), &PathBuf::from("/tmp/out/demo-api"));
    }

    #[test]
    fn javascript_plan_contains_expected_layout() {
        let s = spec("demo-api", Language::JavaScript);
        let plan = ScaffoldPlanner::plan(&s, ".").unwrap();

        let dirs: Vec<String> = plan.directories().map(|d| d.display().to_string()).collect();
        for dir in [
            "src",
            "src/controllers",
            "src/middlewares",
            "src/models",
            "src/routes",
            "src/services",
        ] {
            assert!(dirs.contains(&dir.to_string()), "missing directory {dir}");
        }

        let files: Vec<String> = plan.files().map(|f| f.path.display().to_string()).collect();
        for file in [
            "src/app.js",
            "server.js",
            ".env",
            ".gitignore",
            "package.json",
            "README.md",
        ] {
            assert!(files.contains(&file.to_string()), "missing file {file}");
        }
    }

    #[test]
    fn typescript_plan_swaps_entry_point_and_adds_configs() {
        let s = spec("demo-api", Language::TypeScript);
        let plan = ScaffoldPlanner::plan(&s, ".").unwrap();

        let files: Vec<String> = plan.files().map(|f| f.path.display().to_string()).collect();
        assert!(files.contains(&"src/server.ts".to_string()));
        assert!(files.contains(&"tsconfig.json".to_string()));
        assert!(files.contains(&"nodemon.json".to_string()));
        assert!(!files.contains(&"server.js".to_string()));
    }

    #[test]
    fn plan_substitutes_project_name() {
        let s = spec("demo-api", Language::JavaScript);
        let plan = ScaffoldPlanner::plan(&s, ".").unwrap();

        let readme = plan
            .files()
            .find(|f| f.path.ends_with("README.md"))
            .unwrap();
        assert!(readme.content.starts_with("# demo-api"));
        assert!(!readme.content.contains("{{PROJECT_NAME}}"));
    }

    #[test]
    fn rendered_package_manifest_is_valid_json_with_exact_name() {
        let s = spec("x", Language::JavaScript);
        let plan = ScaffoldPlanner::plan(&s, ".").unwrap();

        let manifest = plan
            .files()
            .find(|f| f.path.ends_with("package.json"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&manifest.content).unwrap();
        assert_eq!(value["name"], "x");
    }

    #[test]
    fn planner_name_check_matches_spec_validation() {
        // Same validation hook as ProjectSpec::new, so both layers reject
        // the same inputs.
        assert!(matches!(
            validate_name("a/b"),
            Err(DomainError::InvalidProjectName { .. })
        ));
        assert!(validate_name("demo-api").is_ok());
    }
}
