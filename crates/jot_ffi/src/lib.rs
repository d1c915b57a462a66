//! Host-facing bridge crate for the Jot core.
//!
//! Everything exported to the Flutter side lives in [`api`].

pub mod api;
