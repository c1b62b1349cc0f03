//! REST failure taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx response is a `Status` error carrying the backend's message.
//! The client does not distinguish validation, authorization and server
//! faults beyond the text; callers log and surface it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Build a `Status` error from a response body, preferring the backend's
    /// `detail` text.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = detail_message(body).unwrap_or_else(|| request_failed_message(status));
        Self::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

pub(crate) fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Extract `detail` from a FastAPI-style error body.
///
/// `detail` is either a string or a list of validation items with `msg`
/// fields, which are joined with `"; "`.
fn detail_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(text) if !text.is_empty() => Some(text.clone()),
        serde_json::Value::Array(items) => {
            let parts: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
                .collect();
            if parts.is_empty() { None } else { Some(parts.join("; ")) }
        }
        _ => None,
    }
}
