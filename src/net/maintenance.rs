//! Preventive-plan and work-order endpoints.

#[cfg(test)]
#[path = "maintenance_test.rs"]
mod maintenance_test;

use super::api::{ApiClient, Method, with_query};
use super::error::ApiError;
use super::types::{CheckAndRunResult, PreventivePlan, PreventivePlanInput, WorkOrder, WorkOrderInput, WorkOrderStatus};

/// Server-side filters for `GET /work-orders`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    pub status: Option<WorkOrderStatus>,
    pub asset_id: Option<i64>,
}

impl WorkOrderFilter {
    fn endpoint(self) -> String {
        with_query(
            "/work-orders",
            &[
                ("status", self.status.map(|s| s.as_wire().to_owned())),
                ("asset_id", self.asset_id.map(|id| id.to_string())),
            ],
        )
    }
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn preventive_plans(&self) -> Result<Vec<PreventivePlan>, ApiError> {
        self.get("/preventive-plans").await
    }

    /// # Errors
    ///
    /// Returns the backend's validation message on rejection.
    pub async fn create_preventive_plan(&self, input: &PreventivePlanInput) -> Result<PreventivePlan, ApiError> {
        self.send_json(Method::Post, "/preventive-plans", input).await
    }

    /// # Errors
    ///
    /// Returns an error if the plan is missing or the request fails.
    pub async fn delete_preventive_plan(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/preventive-plans/{id}")).await
    }

    /// Generate work orders for every active plan that is due.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn check_and_run_preventive_plans(&self) -> Result<CheckAndRunResult, ApiError> {
        self.post_empty("/preventive-plans/check-and-run").await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn work_orders(&self, filter: WorkOrderFilter) -> Result<Vec<WorkOrder>, ApiError> {
        self.get(&filter.endpoint()).await
    }

    /// # Errors
    ///
    /// Returns an error if the work order is missing or the request fails.
    pub async fn work_order(&self, id: i64) -> Result<WorkOrder, ApiError> {
        self.get(&format!("/work-orders/{id}")).await
    }

    /// # Errors
    ///
    /// Returns the backend's validation message on rejection.
    pub async fn create_work_order(&self, input: &WorkOrderInput) -> Result<WorkOrder, ApiError> {
        self.send_json(Method::Post, "/work-orders", input).await
    }

    /// # Errors
    ///
    /// Returns the backend's message when the work order is missing or invalid.
    pub async fn update_work_order(&self, id: i64, input: &WorkOrderInput) -> Result<WorkOrder, ApiError> {
        self.send_json(Method::Put, &format!("/work-orders/{id}"), input).await
    }
}
