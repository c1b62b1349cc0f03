//! Current-location owner that applies guard decisions to history.
//!
//! DESIGN
//! ======
//! Navigation is synchronous: `navigate` pushes the entry, updates the
//! location and settles the guard before returning, so no render ever sees
//! a protected location for an anonymous viewer. Redirects replace the
//! active entry, which leaves the login path (not the requested one) in
//! history.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use super::guard::{self, AuthStatus, Decision};
use super::history::History;
use super::path::Location;

#[derive(Clone, Debug)]
pub struct Navigator<H> {
    history: H,
    location: Location,
}

impl<H: History> Navigator<H> {
    /// Start at whatever location the history backend currently reports.
    pub fn new(history: H) -> Self {
        let location = Location::parse(&history.current());
        Self { history, location }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Push `target` and settle the guard for it.
    pub fn navigate(&mut self, target: &str, status: AuthStatus) -> Decision {
        let location = Location::parse(target);
        self.history.push(&location.to_url());
        log::debug!("navigate {}", location.to_url());
        self.location = location;
        self.settle(status)
    }

    /// Re-read the location after a back/forward traversal and settle.
    pub fn pop_state(&mut self, status: AuthStatus) -> Decision {
        self.location = Location::parse(&self.history.current());
        log::debug!("popstate {}", self.location.to_url());
        self.settle(status)
    }

    /// Evaluate the guard for the current location, applying a redirect.
    ///
    /// Idempotent: once redirected, the location is the login path and
    /// re-settling renders it in place.
    pub fn settle(&mut self, status: AuthStatus) -> Decision {
        let decision = guard::evaluate(self.location.path(), status);
        if let Decision::Redirect(route) = decision {
            let target = route.path();
            log::info!("redirecting {} to {target}", self.location.path());
            self.history.replace(&target);
            self.location = Location::parse(&target);
        }
        decision
    }
}
