use super::types::{
    line_error_response::LineErrorResponse,
    line_messages::{ReplyMessageRequest, SendMessage},
    line_service_error::LineServiceError,
};

pub const DEFAULT_LINE_API_HOST: &str = "https://api.line.me";

#[derive(Clone)]
pub struct LineServiceConfig {
    pub channel_access_token: String,
    pub host: String,
}

#[derive(Clone)]
pub struct LineService {
    config: LineServiceConfig,
    client: reqwest::Client,
}

impl LineService {
    pub fn new(config: LineServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Answers an inbound event. A reply token can only be used once.
    pub async fn reply(
        &self,
        reply_token: &str,
        messages: Vec<SendMessage>,
    ) -> Result<(), LineServiceError> {
        let url = format!("{}/v2/bot/message/reply", self.config.host);

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.config.channel_access_token)
            .json(&ReplyMessageRequest {
                reply_token: reply_token.to_string(),
                messages,
            })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let error = serde_json::from_str::<LineErrorResponse>(&body).unwrap_or_else(|_| {
            LineErrorResponse {
                message: body,
                details: Vec::new(),
            }
        });

        Err(LineServiceError::Api {
            status,
            message: error.message,
            details: error.details,
        })
    }
}
