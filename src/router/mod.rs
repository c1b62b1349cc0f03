//! Client-side routing: path normalization, route table, auth guard, history.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser location is the single input. `path` normalizes it, `route`
//! maps it onto the finite `Route` enum, `guard` decides whether the viewer
//! may see it, and `navigator` applies that decision to a `History` backend.
//!
//! DESIGN
//! ======
//! Every piece except `BrowserHistory` is plain data so routing behavior is
//! exercised natively in tests through `MemoryHistory`.

pub mod guard;
pub mod history;
pub mod navigator;
pub mod path;
pub mod route;

pub use guard::{AuthStatus, Decision};
pub use history::{BrowserHistory, History, MemoryHistory};
pub use navigator::Navigator;
pub use path::{Location, normalize};
pub use route::Route;
