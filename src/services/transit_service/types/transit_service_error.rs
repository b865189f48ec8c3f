use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransitServiceError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transit API responded with status {0}")]
    Status(StatusCode),

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
