//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser concerns (storage, dialogs, the clock) live here behind `csr`
//! gates so page logic stays testable natively.

pub mod dialog;
pub mod format;
pub mod schedule;
pub mod search;
pub mod storage;
pub mod task;
