//! Company profile shown in the header (name and logo).

#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use crate::config::ClientConfig;
use crate::net::types::CompanySettings;

pub const DEFAULT_COMPANY_NAME: &str = "MantenPro";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyState {
    pub name: String,
    pub logo_url: Option<String>,
    /// Bumped on every logo upload so the browser refetches the image.
    pub logo_version: u32,
    pub loading: bool,
}

impl Default for CompanyState {
    fn default() -> Self {
        Self { name: DEFAULT_COMPANY_NAME.to_owned(), logo_url: None, logo_version: 0, loading: false }
    }
}

impl CompanyState {
    /// Adopt freshly loaded settings; a blank name keeps the default.
    pub fn apply(&mut self, settings: &CompanySettings) {
        let name = settings.name.trim();
        self.name = if name.is_empty() { DEFAULT_COMPANY_NAME.to_owned() } else { name.to_owned() };
        self.logo_url = settings.logo_url.clone().filter(|url| !url.is_empty());
        self.loading = false;
    }

    /// Record a new logo upload.
    pub fn set_logo(&mut self, logo_url: String) {
        self.logo_url = Some(logo_url);
        self.logo_version += 1;
    }

    /// Absolute, cache-busted logo URL for `<img src>`.
    pub fn logo_src(&self, config: &ClientConfig) -> Option<String> {
        let url = config.asset_url(self.logo_url.as_deref()?);
        let sep = if url.contains('?') { '&' } else { '?' };
        Some(format!("{url}{sep}t={}", self.logo_version))
    }

    /// Back to the default profile (after logout).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
