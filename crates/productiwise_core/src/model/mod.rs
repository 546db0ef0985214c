//! Domain model for tasks, habits, community groups, profile and chat turns.
//!
//! # Responsibility
//! - Define canonical data structures used by store, services and views.
//! - Own field-level validation rules for user-submitted input.
//!
//! # Invariants
//! - Every stored entity is identified by a string id unique in its collection.
//! - Model types carry no behavior that touches other collections.

pub mod chat;
pub mod community;
pub mod habit;
pub mod profile;
pub mod task;
