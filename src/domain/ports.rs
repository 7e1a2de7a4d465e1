use crate::domain::model::{ApiResponse, StimulusRequest};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Delivers one stimulus to the paired device.
#[async_trait]
pub trait StimulusSender: Send + Sync {
    async fn send(&self, request: &StimulusRequest, token: &str) -> Result<ApiResponse>;
}
