//! Template rendering context.

/// Context for template rendering.
///
/// A **Value Object** carrying the data substituted into parameterized
/// templates.  Deliberately minimal: the catalog's templates only take the
/// project name as a variable, so there are no loops, conditionals, or
/// derived casings — just `{{PROJECT_NAME}}`.
///
/// ## Edge Cases
///
/// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}` (no error)
/// - repeated placeholders → all occurrences replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    project_name: String,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
        }
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Render a template string by replacing `{{PROJECT_NAME}}` placeholders.
    ///
    /// Simple linear scan and replace — adequate for the catalog's file
    /// sizes (< 10KB).  When templates ever need conditionals or filters
    /// this becomes a real engine (Tera or Minijinja) without changing the
    /// `RenderContext` API.
    pub fn render(&self, template: &str) -> String {
        template.replace("{{PROJECT_NAME}}", &self.project_name)
    }
}
