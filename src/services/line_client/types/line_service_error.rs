use reqwest::StatusCode;
use thiserror::Error;

use super::line_error_response::LineErrorDetail;

#[derive(Debug, Error)]
pub enum LineServiceError {
    #[error("Failed to send request: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LINE Messaging API responded with {status}: {message}")]
    Api {
        status: StatusCode,
        message: String,
        details: Vec<LineErrorDetail>,
    },
}
