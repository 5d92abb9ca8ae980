use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for display without consuming)
/// - Categorizable (for CLI styling)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Unsupported language '{language}'")]
    UnsupportedLanguage { language: String },

    // ========================================================================
    // Plan Invariant Violations
    // ========================================================================
    #[error("Scaffold plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("No parent directory planned for: {path}")]
    MissingParentDirectory { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, and underscores".into(),
                "Examples: my-api, my_app, backend123".into(),
            ],
            Self::UnsupportedLanguage { language } => vec![
                format!("'{}' is not a supported language", language),
                "Supported languages:".into(),
                "  • javascript (or js) - plain Node.js".into(),
                "  • typescript (or ts) - typed, compiled with tsc".into(),
            ],
            _ => vec!["This looks like a bug in the template catalog; please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::UnsupportedLanguage { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
