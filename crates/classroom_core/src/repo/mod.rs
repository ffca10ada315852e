//! Repository layer for classroom records.
//!
//! # Responsibility
//! - Define the storage contract the roster service depends on.
//! - Provide the in-memory implementation used by hosts and tests.
//!
//! # Invariants
//! - Classroom names are unique keys.
//! - Repository APIs return semantic errors (`AlreadyExists`, `NotFound`).

pub mod classroom_repo;
