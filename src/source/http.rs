//! HTTP user source
//!
//! GETs the user collection from a fixed endpoint with reqwest and decodes it.
//! The whole request is raced against the cancellation token; dropping the
//! reqwest future on cancellation aborts the connection.

use reqwest::{Client, Url};
use tokio_util::sync::CancellationToken;

use super::{FetchError, UserSource};
use crate::user::{User, parse_users};

/// Public demo directory used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// reqwest-backed user source
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    client: Client,
    endpoint: Url,
}

impl HttpUserSource {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn fetch_uncancelled(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let code = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FetchError::Status { code, message });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_users(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self, cancel_token: &CancellationToken) -> Result<Vec<User>, FetchError> {
        if cancel_token.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => {
                log::debug!("Fetch from {} cancelled mid-flight", self.endpoint);
                Err(FetchError::Cancelled)
            }

            result = self.fetch_uncancelled() => result,
        }
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
