//! Screen view-models.
//!
//! # Responsibility
//! - Hold the transient per-screen state (query text, selection,
//!   input-row visibility) the host renders from.
//! - Gate every destructive action behind an explicit confirm value.
//!
//! Stores are injected by reference into each operation; view-models
//! never own or reach for ambient state.

pub mod note_detail;
pub mod note_form;
pub mod notes_list;
pub mod todo;
