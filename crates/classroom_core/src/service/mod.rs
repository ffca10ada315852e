//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into roster-level operations.
//! - Keep the menu shell decoupled from storage details.

pub mod roster_service;
