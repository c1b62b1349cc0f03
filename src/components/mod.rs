//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, notices) and read shared state
//! from the context providers installed by `App`.

pub mod dialog;
pub mod field;
pub mod header;
pub mod link;
pub mod notice;
