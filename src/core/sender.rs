use crate::core::{ApiResponse, StimulusRequest, StimulusSender};
use crate::utils::error::{Result, ZapError};
use reqwest::Client;
use std::error::Error as _;
use std::time::Duration;

/// Posts stimuli to the Pavlok REST API.
pub struct HttpStimulusSender {
    client: Client,
    endpoint: String,
}

impl HttpStimulusSender {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ZapError::Configuration {
                message: format!("Failed to build HTTP client: {}", describe_transport_error(&e)),
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl StimulusSender for HttpStimulusSender {
    async fn send(&self, request: &StimulusRequest, token: &str) -> Result<ApiResponse> {
        let payload = request.to_payload();
        tracing::debug!("POST {} body={}", self.endpoint, payload);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ZapError::Connection {
                reason: describe_transport_error(&e),
            })?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let body = response.text().await.map_err(|e| ZapError::Connection {
            reason: describe_transport_error(&e),
        })?;

        if !status.is_success() {
            tracing::warn!("Got non-2xx status from API: {}", status.as_u16());
            return Err(ZapError::HttpStatus {
                code: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ZapError::InvalidResponse {
                message: format!("{} (body: {})", e, body),
            })?;

        Ok(ApiResponse(json))
    }
}

/// Flattens reqwest's error chain; the top-level message alone hides the cause.
fn describe_transport_error(err: &reqwest::Error) -> String {
    let mut reason = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    if err.is_timeout() {
        reason.push_str(" (timed out)");
    }
    reason
}
