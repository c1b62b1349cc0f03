//! Company settings, logo upload and dashboard statistics.

use super::api::{ApiClient, Method};
use super::error::ApiError;
use super::types::{CompanySettings, CompanySettingsUpdate, DashboardStats};
#[cfg(feature = "csr")]
use super::types::LogoUpload;

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error when the user has no company or the request fails.
    pub async fn company_settings(&self) -> Result<CompanySettings, ApiError> {
        self.get("/settings/general").await
    }

    /// # Errors
    ///
    /// Returns the backend's validation message on rejection.
    pub async fn update_company_settings(&self, update: &CompanySettingsUpdate) -> Result<CompanySettings, ApiError> {
        self.send_json(Method::Put, "/settings/general", update).await
    }

    /// Upload the company logo as the multipart field `file`.
    ///
    /// # Errors
    ///
    /// Returns an error if the upload is rejected or fails.
    #[cfg(feature = "csr")]
    pub async fn upload_company_logo(&self, file: &web_sys::File) -> Result<LogoUpload, ApiError> {
        self.upload("/settings/logo", "file", file).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/dashboard/stats").await
    }
}
