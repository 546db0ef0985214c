//! Use-case operations over `AppState`.
//!
//! # Responsibility
//! - Provide the only mutation entry points for app state.
//! - Emit metadata-only diagnostics for every mutation.
//!
//! # Invariants
//! - Operations validate before mutating; a returned error means no change.
//! - Log lines carry ids and counts, never user-entered text.

pub mod community_service;
pub mod habit_service;
pub mod profile_service;
pub mod task_service;
