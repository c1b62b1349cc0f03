//! Application-state containers provided to the view tree as context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each container in an `RwSignal` and provides it once; pages
//! read them with `expect_context` instead of reaching for globals.

pub mod auth;
pub mod company;
