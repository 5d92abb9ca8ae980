//! Validated scaffold input: project name + language variant.

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Language variant of the generated boilerplate.
///
/// A closed enum rather than scattered conditionals: adding a new variant
/// means adding a new catalog module and a new arm here, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Plain Node.js source (`.js`, run directly with node/nodemon).
    JavaScript,
    /// Statically-typed source (`.ts`, compiled with tsc before running).
    TypeScript,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
        }
    }

    /// File extension of generated source modules.
    pub fn source_extension(&self) -> &'static str {
        match self {
            Self::JavaScript => "js",
            Self::TypeScript => "ts",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            other => Err(DomainError::UnsupportedLanguage {
                language: other.to_string(),
            }),
        }
    }
}

/// Validated input driving scaffold generation.
///
/// Created once per invocation (by the CLI layer), immutable thereafter.
///
/// Invariant: `name` is usable as a single filesystem path segment — not
/// empty, no path separators, no leading dot.  Enforced at construction;
/// the planner re-checks as defense in depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    language: Language,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, language: Language) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self { name, language })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.language)
    }
}

/// Check the path-segment invariant.
///
/// Shared by [`ProjectSpec::new`] and the planner so both layers reject the
/// same inputs with the same reason strings.
pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
    let reason = if name.trim().is_empty() {
        Some("name cannot be empty")
    } else if name.contains('/') || name.contains('\\') {
        Some("name cannot contain path separators")
    } else if name.starts_with('.') {
        Some("name cannot start with '.'")
    } else if name.chars().any(char::is_whitespace) {
        Some("name cannot contain whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(DomainError::InvalidProjectName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
