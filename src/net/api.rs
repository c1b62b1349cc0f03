//! REST plumbing shared by every endpoint module.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, with the stored bearer
//! token attached to every request.
//! Native builds: every call returns `ApiError::Unavailable` so pure logic
//! stays testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `ApiError::Status` with the backend's `detail`
//! text. Nothing is retried; callers log and surface the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::config::ClientConfig;

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Handle to the backend, provided to the view tree as context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.builder(Method::Get, path).send().await.map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    pub(crate) async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .builder(method, path)
                .json(body)
                .map_err(|e| ApiError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` without a body (query-string parameters only).
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.builder(Method::Post, path).send().await.map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE`, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self.builder(Method::Delete, path).send().await.map_err(network)?;
            check_status(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` an `application/x-www-form-urlencoded` body.
    pub(crate) async fn post_form<T: DeserializeOwned>(&self, path: &str, fields: &[(&str, &str)]) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let params = web_sys::UrlSearchParams::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
            for (key, value) in fields {
                params.append(key, value);
            }
            let resp = self
                .builder(Method::Post, path)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .body(params)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, fields);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a single file as `multipart/form-data`.
    #[cfg(feature = "csr")]
    pub(crate) async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        file: &web_sys::File,
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
        form.append_with_blob_and_filename(field, file, &file.name())
            .map_err(|e| ApiError::Network(format!("{e:?}")))?;
        let resp = self
            .builder(Method::Post, path)
            .body(form)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_json(resp).await
    }

    #[cfg(feature = "csr")]
    fn builder(&self, method: Method, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;

        let url = self.config.endpoint(path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        match crate::util::storage::load_token() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }
}

#[cfg(feature = "csr")]
fn network(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    log::warn!("{} -> {status}: {err}", resp.url());
    Err(err)
}

#[cfg(feature = "csr")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Append `key=value` pairs for the present values to `path`.
pub(crate) fn with_query(path: &str, params: &[(&str, Option<String>)]) -> String {
    let pairs: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| format!("{key}={v}")))
        .collect();
    if pairs.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", pairs.join("&"))
    }
}
