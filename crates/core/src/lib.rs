//! Parish back-office domain logic.
//!
//! This crate has zero internal dependencies so the repository layer, the
//! API server, and any future CLI tooling can all share the same pure
//! validation and computation code.

pub mod donations;
pub mod error;
pub mod media;
pub mod ordering;
pub mod schedule;
pub mod settings;
pub mod slug;
pub mod theme;
pub mod types;
