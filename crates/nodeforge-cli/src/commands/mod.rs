//! Command implementations.
//!
//! Nodeforge has a single operation, so there is exactly one command
//! module.  The split from `main.rs` keeps argument wiring separate from
//! the scaffold flow.

pub mod create;
