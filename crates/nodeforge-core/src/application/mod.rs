//! Application layer for Nodeforge.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldPlanner, ScaffoldExecutor)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod executor;
pub mod planner;
pub mod ports;

// Re-export main services
pub use executor::ScaffoldExecutor;
pub use planner::ScaffoldPlanner;

// Re-export port traits (for adapter implementation)
pub use ports::Filesystem;

pub use error::ApplicationError;
