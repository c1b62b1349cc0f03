//! History backends for the navigator.
//!
//! `BrowserHistory` drives `window.history` and reads `window.location`;
//! outside the browser it is inert and always reports the root. It holds no
//! handles so it stays `Send + Sync` for signal storage.
//! `MemoryHistory` keeps an in-process entry stack with back/forward.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

/// Minimal session-history surface the navigator needs.
pub trait History {
    /// Current `path?query` of the active entry.
    fn current(&self) -> String;
    /// Append an entry and make it active, dropping any forward entries.
    fn push(&mut self, url: &str);
    /// Overwrite the active entry.
    fn replace(&mut self, url: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current(&self) -> String {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return "/".to_owned();
            };
            let location = window.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_owned());
            let search = location.search().unwrap_or_default();
            format!("{path}{search}")
        }
        #[cfg(not(feature = "csr"))]
        {
            "/".to_owned()
        }
    }

    fn push(&mut self, url: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            if history
                .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
                .is_err()
            {
                log::warn!("history.pushState rejected {url}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }

    fn replace(&mut self, url: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            if history
                .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url))
                .is_err()
            {
                log::warn!("history.replaceState rejected {url}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }
}

/// In-memory history stack.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self { entries: vec![initial.to_owned()], index: 0 }
    }

    /// Step back one entry. Returns `false` at the start of the stack.
    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward one entry. Returns `false` at the end of the stack.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl History for MemoryHistory {
    fn current(&self) -> String {
        self.entries[self.index].clone()
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.to_owned());
        self.index = self.entries.len() - 1;
    }

    fn replace(&mut self, url: &str) {
        url.clone_into(&mut self.entries[self.index]);
    }
}
