//! Unified error handling for Nodeforge Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Nodeforge Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// nodeforge-core, providing a unified interface for error handling.
/// All three families are terminal for the invocation: nothing is retried.
#[derive(Debug, Error, Clone)]
pub enum NodeforgeError {
    /// Errors from the domain layer (validation, plan invariants).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (execution failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NodeforgeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Nodeforge".into(),
                "Please report this issue at: https://github.com/cosecruz/nodeforge/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid input (project name, language).
    Validation,
    /// Target root already exists.
    Conflict,
    /// Underlying filesystem failure.
    Io,
    /// Bug territory.
    Internal,
}

/// Convenient result type alias.
pub type NodeforgeResult<T> = Result<T, NodeforgeError>;
