//! Core roster logic for the virtual classroom manager.
//! This crate is the single source of truth for roster invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LogSettings, LoggingError,
};
pub use model::classroom::Classroom;
pub use repo::classroom_repo::{
    ClassroomRepository, InMemoryClassroomRepository, RepoError, RepoResult,
};
pub use service::roster_service::{RosterError, RosterResult, RosterService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
