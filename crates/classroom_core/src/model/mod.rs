//! Domain model for classroom rosters.
//!
//! # Responsibility
//! - Define the records owned by the roster service.
//!
//! # Invariants
//! - Records are passive; existence checks live in the service layer.

pub mod classroom;
