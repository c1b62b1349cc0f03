//! Purchase-order endpoints under `/stock`.

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use super::api::{ApiClient, Method, with_query};
use super::error::ApiError;
use super::types::{PurchaseOrder, PurchaseOrderInput};

/// Status groups the backend understands for purchase-order listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseOrderView {
    #[default]
    All,
    /// Pending or partially received.
    Pending,
    /// Fully received.
    Received,
}

impl PurchaseOrderView {
    pub const ALL: [Self; 3] = [Self::All, Self::Pending, Self::Received];

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::All => "TODAS",
            Self::Pending => "PENDIENTES",
            Self::Received => "RECIBIDAS",
        }
    }

    pub fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_wire() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "Todas",
            Self::Pending => "Pendientes",
            Self::Received => "Recibidas",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseOrderFilter {
    pub view: PurchaseOrderView,
    pub supplier_id: Option<i64>,
}

impl PurchaseOrderFilter {
    fn endpoint(self) -> String {
        with_query(
            "/stock/purchase-orders",
            &[
                ("status", Some(self.view.as_wire().to_owned())),
                ("supplier_id", self.supplier_id.map(|id| id.to_string())),
            ],
        )
    }
}

fn purchase_order_endpoint(id: i64) -> String {
    format!("/stock/purchase-orders/{id}")
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn purchase_orders(&self, filter: PurchaseOrderFilter) -> Result<Vec<PurchaseOrder>, ApiError> {
        self.get(&filter.endpoint()).await
    }

    /// # Errors
    ///
    /// Returns an error if the order is missing or the request fails.
    pub async fn purchase_order(&self, id: i64) -> Result<PurchaseOrder, ApiError> {
        self.get(&purchase_order_endpoint(id)).await
    }

    /// # Errors
    ///
    /// Returns the backend's validation message on rejection.
    pub async fn create_purchase_order(&self, input: &PurchaseOrderInput) -> Result<PurchaseOrder, ApiError> {
        self.send_json(Method::Post, "/stock/purchase-orders", input).await
    }

    /// Replace header fields and line items (including received quantities).
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the order is missing or invalid.
    pub async fn update_purchase_order(&self, id: i64, input: &PurchaseOrderInput) -> Result<PurchaseOrder, ApiError> {
        self.send_json(Method::Put, &purchase_order_endpoint(id), input).await
    }

    /// # Errors
    ///
    /// Returns an error if the order is missing or the request fails.
    pub async fn delete_purchase_order(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&purchase_order_endpoint(id)).await
    }
}
