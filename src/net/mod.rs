//! Networking modules for the maintenance REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing and bearer-token attachment, `error` the
//! failure taxonomy, `types` the wire schema. The remaining modules add
//! typed endpoint methods to `ApiClient`, one backend router each.

pub mod api;
pub mod archives;
pub mod auth;
pub mod error;
pub mod maintenance;
pub mod settings;
pub mod stock;
pub mod types;

pub use api::ApiClient;
pub use error::ApiError;
