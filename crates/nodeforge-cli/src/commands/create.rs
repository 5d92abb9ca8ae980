//! The scaffold flow: arguments in, project directory out.
//!
//! Responsibility: translate CLI arguments into a `ProjectSpec`, call the
//! core planner and executor, and display results.  No business logic
//! lives here.

use std::io::{self, IsTerminal};
use std::path::Path;

use tracing::{debug, info, instrument};

use nodeforge_adapters::LocalFilesystem;
use nodeforge_core::{
    application::{ApplicationError, ScaffoldExecutor, ScaffoldPlanner},
    domain::{DomainError, Language as CoreLanguage, ProjectSpec, ScaffoldPlan},
    error::NodeforgeError,
};

use crate::{
    cli::{CreateArgs, GlobalArgs, Language},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the scaffold run.
///
/// Dispatch sequence:
/// 1. Validate the project name (builds the `ProjectSpec`)
/// 2. Resolve the language: flag, then prompt, then config, then JavaScript
/// 3. Confirm with user unless `--yes`, `--quiet`, or no terminal
/// 4. Plan the layout (pure, no filesystem access)
/// 5. Early-exit if `--dry-run`
/// 6. Execute the plan via `ScaffoldExecutor`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1 + 2. Name validation and language resolution
    let language = resolve_language(&args, &config)?;
    let spec = build_spec(&args.name, language)?;

    debug!(language = %spec.language(), "Project spec resolved");

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && io::stdin().is_terminal() {
        show_configuration(&spec, &output)?;
        if !confirm(spec.name())? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Plan the full layout before touching the disk
    let plan = ScaffoldPlanner::plan(&spec, ".").map_err(CliError::Core)?;

    // 5. Dry run: describe but do not write.
    if args.dry_run {
        return describe_plan(&plan, &output);
    }

    // 6. Execute against the real filesystem
    let executor = ScaffoldExecutor::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Creating '{}'...", spec.name()))?;
    info!(project = %spec.name(), path = %plan.root().display(), "Scaffold started");

    run_executor(&executor, &plan, &output)?;

    info!(project = %spec.name(), "Scaffold completed");

    // 7. Success + next steps
    output.success(&format!("Project '{}' created!", spec.name()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", spec.name()))?;
        output.print("  npm install")?;
        output.print("  npm run dev")?;
        if spec.language() == CoreLanguage::TypeScript {
            output.print("  npm run build   # compile for production")?;
        }
    }

    Ok(())
}

// ── Spec construction ─────────────────────────────────────────────────────────

/// Validate the name and build the spec.
///
/// A bad name is a CLI-layer input error, not a scaffolding failure, so it
/// surfaces as [`CliError::InvalidProjectName`] with its own suggestions.
fn build_spec(name: &str, language: CoreLanguage) -> CliResult<ProjectSpec> {
    ProjectSpec::new(name, language).map_err(|e| match e {
        DomainError::InvalidProjectName { name, reason } => {
            CliError::InvalidProjectName { name, reason }
        }
        other => CliError::Core(other.into()),
    })
}

// ── Execution ─────────────────────────────────────────────────────────────────

/// Run the executor, warning about partial output on mid-execution failure.
///
/// A preflight conflict wrote nothing, so the warning is reserved for
/// failures past that point.
fn run_executor(
    executor: &ScaffoldExecutor,
    plan: &ScaffoldPlan,
    output: &OutputManager,
) -> CliResult<()> {
    if let Err(err) = executor.execute(plan) {
        if !matches!(
            &err,
            NodeforgeError::Application(ApplicationError::ProjectExists { .. })
        ) {
            output.warning("A partially created project directory may be left behind")?;
        }
        return Err(CliError::Core(err));
    }
    Ok(())
}

// ── Language resolution ───────────────────────────────────────────────────────

/// Pick the language variant.
///
/// Precedence: `--lang` flag, interactive prompt (terminal sessions only),
/// config-file default, JavaScript.
fn resolve_language(args: &CreateArgs, config: &AppConfig) -> CliResult<CoreLanguage> {
    if let Some(lang) = args.language {
        return Ok(lang.into());
    }

    #[cfg(feature = "interactive")]
    if !args.yes && io::stdin().is_terminal() && io::stdout().is_terminal() {
        let lang: Language = crate::prompt::select_language()?;
        return Ok(lang.into());
    }

    if let Some(configured) = config.defaults.language.as_deref() {
        return configured
            .parse::<CoreLanguage>()
            .map_err(|e| CliError::Core(e.into()));
    }

    Ok(CoreLanguage::JavaScript)
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(spec: &ProjectSpec, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:  {}", spec.name()))?;
    out.print(&format!("  Language: {}", spec.language()))?;
    out.print(&format!("  Location: ./{}", spec.name()))?;
    out.print("")?;
    Ok(())
}

#[cfg(feature = "interactive")]
fn confirm(project_name: &str) -> CliResult<bool> {
    crate::prompt::confirm_scaffold(project_name)
}

#[cfg(not(feature = "interactive"))]
fn confirm(_project_name: &str) -> CliResult<bool> {
    use std::io::Write;

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

fn describe_plan(plan: &ScaffoldPlan, out: &OutputManager) -> CliResult<()> {
    out.info(&format!(
        "Dry run: would create {} entries under {}",
        plan.entry_count(),
        plan.root().display(),
    ))?;
    for dir in plan.directories() {
        out.print(&format!("  dir   {}", relative_display(plan.root(), dir)))?;
    }
    for file in plan.files() {
        out.print(&format!(
            "  file  {}",
            relative_display(plan.root(), &file.path)
        ))?;
    }
    Ok(())
}

/// Strip the plan root prefix for compact listings.
fn relative_display(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use nodeforge_core::application::Filesystem;
    use nodeforge_core::error::NodeforgeResult;

    fn create_args(language: Option<Language>) -> CreateArgs {
        CreateArgs {
            name: "my-api".into(),
            language,
            yes: true,
            dry_run: false,
        }
    }

    #[test]
    fn flag_wins_over_config() {
        let config = AppConfig {
            defaults: crate::config::Defaults {
                language: Some("typescript".into()),
            },
            ..Default::default()
        };
        let args = create_args(Some(Language::JavaScript));
        let lang = resolve_language(&args, &config).unwrap();
        assert_eq!(lang, CoreLanguage::JavaScript);
    }

    #[test]
    fn config_default_applies_without_flag() {
        let config = AppConfig {
            defaults: crate::config::Defaults {
                language: Some("typescript".into()),
            },
            ..Default::default()
        };
        // --yes suppresses the prompt path, so config decides.
        let lang = resolve_language(&create_args(None), &config).unwrap();
        assert_eq!(lang, CoreLanguage::TypeScript);
    }

    #[test]
    fn javascript_is_the_fallback() {
        let lang = resolve_language(&create_args(None), &AppConfig::default()).unwrap();
        assert_eq!(lang, CoreLanguage::JavaScript);
    }

    #[test]
    fn bad_config_language_is_an_error() {
        let config = AppConfig {
            defaults: crate::config::Defaults {
                language: Some("cobol".into()),
            },
            ..Default::default()
        };
        assert!(resolve_language(&create_args(None), &config).is_err());
    }

    #[test]
    fn relative_display_strips_root() {
        let root = Path::new("./my-api");
        let path = Path::new("./my-api/src/app.js");
        assert_eq!(relative_display(root, path), "src/app.js");
    }

    #[test]
    fn slash_in_name_is_a_cli_validation_error() {
        let err = build_spec("bad/name", CoreLanguage::JavaScript).unwrap_err();
        assert!(matches!(err, CliError::InvalidProjectName { .. }));
    }

    #[test]
    fn valid_name_builds_a_spec() {
        let spec = build_spec("demo-api", CoreLanguage::TypeScript).unwrap();
        assert_eq!(spec.name(), "demo-api");
    }

    // ── run_executor ──────────────────────────────────────────────────────

    /// Refuses every mutation, as a read-only disk would.
    struct RefusingFilesystem;

    impl Filesystem for RefusingFilesystem {
        fn create_dir_all(&self, path: &Path) -> NodeforgeResult<()> {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        }

        fn write_file(&self, path: &Path, _content: &str) -> NodeforgeResult<()> {
            Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        }

        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    /// Reports every path as taken, so preflight always conflicts.
    struct OccupiedFilesystem;

    impl Filesystem for OccupiedFilesystem {
        fn create_dir_all(&self, _path: &Path) -> NodeforgeResult<()> {
            Ok(())
        }

        fn write_file(&self, _path: &Path, _content: &str) -> NodeforgeResult<()> {
            Ok(())
        }

        fn exists(&self, _path: &Path) -> bool {
            true
        }
    }

    fn quiet_output() -> OutputManager {
        let args = crate::cli::GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn execution_failure_surfaces_as_core_error() {
        let spec = build_spec("my-api", CoreLanguage::JavaScript).unwrap();
        let plan = ScaffoldPlanner::plan(&spec, ".").unwrap();
        let executor = ScaffoldExecutor::new(Box::new(RefusingFilesystem));

        let err = run_executor(&executor, &plan, &quiet_output()).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(NodeforgeError::Application(
                ApplicationError::Filesystem { .. }
            ))
        ));
    }

    #[test]
    fn conflict_passes_through_unchanged() {
        let spec = build_spec("my-api", CoreLanguage::JavaScript).unwrap();
        let plan = ScaffoldPlanner::plan(&spec, ".").unwrap();
        let executor = ScaffoldExecutor::new(Box::new(OccupiedFilesystem));

        let err = run_executor(&executor, &plan, &quiet_output()).unwrap_err();
        match err {
            CliError::Core(NodeforgeError::Application(ApplicationError::ProjectExists {
                path,
            })) => assert_eq!(path, PathBuf::from("./my-api")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
