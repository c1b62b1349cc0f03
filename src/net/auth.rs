//! Account endpoints: token login, profile, registration, plans, checkout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::{ApiClient, Method, with_query};
use super::error::ApiError;
use super::types::{CheckoutSession, Plan, RegisterRequest, Token, User};

fn checkout_endpoint(plan_id: i64) -> String {
    with_query("/payments/create-checkout-session", &[("plan_id", Some(plan_id.to_string()))])
}

impl ApiClient {
    /// Exchange credentials for a bearer token via `POST /token`.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection (wrong credentials, inactive user)
    /// or a transport error.
    pub async fn login(&self, email: &str, password: &str) -> Result<Token, ApiError> {
        self.post_form("/token", &[("username", email), ("password", password)]).await
    }

    /// Fetch the profile for the stored token via `GET /users/me`.
    ///
    /// # Errors
    ///
    /// Fails when no valid token is stored or the request fails.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get("/users/me").await
    }

    /// Create a company and its administrator via `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation message (e.g. email taken).
    pub async fn register(&self, request: &RegisterRequest) -> Result<serde_json::Value, ApiError> {
        self.send_json(Method::Post, "/register", request).await
    }

    /// List subscription plans via `GET /payments/plans`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        self.get("/payments/plans").await
    }

    /// Start a subscription checkout and return the provider redirect.
    ///
    /// # Errors
    ///
    /// Returns the backend's message when the plan is unknown or the
    /// payment provider rejects the request.
    pub async fn create_checkout_session(&self, plan_id: i64) -> Result<CheckoutSession, ApiError> {
        self.post_empty(&checkout_endpoint(plan_id)).await
    }
}
