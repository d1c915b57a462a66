//! In-memory collection stores and their persistence mirror.
//!
//! # Responsibility
//! - Own the authoritative in-memory notes and tasks collections.
//! - Mirror every mutation to key-value storage in the background.
//!
//! # Invariants
//! - Mutations apply synchronously in memory; callers never wait on the
//!   durable write.
//! - Each snapshot write carries the full collection, so the last write
//!   always matches the last known in-memory state.

pub mod notes;
pub mod persister;
pub mod tasks;
