//! Shared HTTP plumbing for the Zekta API.
//!
//! Every endpoint wrapper goes through these helpers: JSON in, JSON out,
//! non-2xx mapped to [`Error::Service`] with the server's structured message
//! when one is present.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Thin wrapper around `reqwest::Client` bound to a base URL.
#[derive(Debug, Clone)]
pub(crate) struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Build on an existing `reqwest::Client` so area clients can share one
    /// connection pool.
    pub(crate) fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let request = self.client.get(&url);
        self.send("GET", &url, request).await
    }

    pub(crate) async fn get_json_auth<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.get(&url).bearer_auth(token);
        self.send("GET", &url, request).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.post(&url).json(body);
        self.send("POST", &url, request).await
    }

    pub(crate) async fn post_json_auth<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.post(&url).json(body).bearer_auth(token);
        self.send("POST", &url, request).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.put(&url).json(body);
        self.send("PUT", &url, request).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        let request = self.client.delete(&url).json(body);
        self.send("DELETE", &url, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request to {}: {}", url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response from {}: {}", url, e)))?;

        log::debug!("{} {} -> {}: {}", method, url, status, text);

        if !status.is_success() {
            return Err(service_error(status, &text));
        }

        serde_json::from_str(&text)
            .map_err(|e| Error::Parse(format!("Failed to parse response: {}. Body: {}", e, text)))
    }
}

/// Map a non-2xx response to [`Error::Service`].
///
/// The body is probed for a `message` or `error` string field; the HTTP
/// status text is the fallback.
fn service_error(status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

    Error::Service {
        status: status.as_u16(),
        message,
    }
}
