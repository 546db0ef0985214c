//! Core domain logic for Productiwise.
//! This crate owns session state, its mutation rules and the assistant bridge.

pub mod assistant;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod session;
pub mod store;
pub mod view;

pub use assistant::{
    AssistantBridge, AssistantError, AssistantResult, BridgeState, ExtractedTask, GeminiClient,
    GenerateRequest, GenerativeModel, MediaPayload, ModelConnector,
};
pub use config::AssistantConfig;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::chat::{ChatMessage, ChatRole};
pub use model::community::{CommunityGroup, CommunityMember, GoalProgress};
pub use model::habit::{Habit, HabitUpdate, HabitValidationError, NewHabit, Repetition};
pub use model::profile::UserProfile;
pub use model::task::{NewTask, Priority, Task, TaskUpdate, TaskValidationError};
pub use session::{Credentials, Session, SessionError, View};
pub use store::{AppState, StoreError, StoreResult};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
