//! HTTP client for the third-party form relay
//!
//! The relay accepts a JSON body and forwards it on. Only the status class of
//! the response matters; the body is never read.

use super::{FormRelay, SubmitError};
use crate::state::FormData;
use async_trait::async_trait;

/// Client posting forms to a fixed relay endpoint
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RelayClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl FormRelay for RelayClient {
    async fn submit(&self, data: &FormData) -> Result<(), SubmitError> {
        tracing::info!(endpoint = %self.endpoint, "Submitting form");

        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(data)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Form submission failed before a response");
                SubmitError::from(e)
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Form accepted by relay");
            Ok(())
        } else {
            tracing::warn!(status = status.as_u16(), "Form rejected by relay");
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}
