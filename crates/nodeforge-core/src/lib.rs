//! Nodeforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Nodeforge
//! Node.js backend scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          nodeforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (ScaffoldPlanner, ScaffoldExecutor)  │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: Filesystem)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    nodeforge-adapters (Infrastructure)  │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ProjectSpec, ScaffoldPlan, Catalog)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use nodeforge_core::{
//!     application::ScaffoldPlanner,
//!     domain::{Language, ProjectSpec},
//! };
//!
//! // 1. Create spec
//! let spec = ProjectSpec::new("my-api", Language::JavaScript).unwrap();
//!
//! // 2. Plan (pure, no I/O)
//! let plan = ScaffoldPlanner::plan(&spec, ".").unwrap();
//! assert!(plan.entry_count() > 0);
//! ```
//!
//! Executing a plan needs a [`application::Filesystem`] implementation;
//! `nodeforge-adapters` provides `LocalFilesystem` and `MemoryFilesystem`.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Built-in template catalog (pure data, one module per variant)
pub mod catalog;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Filesystem, ScaffoldExecutor, ScaffoldPlanner};
    pub use crate::catalog::{ArtifactKind, FileTemplate};
    pub use crate::domain::{FileArtifact, Language, ProjectSpec, RenderContext, ScaffoldPlan};
    pub use crate::error::{NodeforgeError, NodeforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
