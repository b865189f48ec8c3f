use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bot_event::{BotEvent, LocationEvent, PostbackEvent};

/// Body of a webhook delivery.
#[derive(Debug, Deserialize, Serialize)]
pub struct WebhookBody {
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WebhookEvent {
    Message(MessageEventBody),
    Postback(PostbackEventBody),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEventBody {
    // absent when the channel is in standby mode
    pub reply_token: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
    pub message: EventMessage,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostbackEventBody {
    pub reply_token: Option<String>,
    #[serde(default)]
    pub timestamp: i64,
    pub postback: PostbackContent,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PostbackContent {
    pub data: String,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EventMessage {
    Location(LocationMessageContent),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LocationMessageContent {
    pub title: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl WebhookEvent {
    pub fn received_at(&self) -> Option<DateTime<Utc>> {
        let timestamp = match self {
            WebhookEvent::Message(m) => m.timestamp,
            WebhookEvent::Postback(p) => p.timestamp,
            WebhookEvent::Unsupported => return None,
        };

        DateTime::from_timestamp_millis(timestamp)
    }

    /// Narrows a raw event to one the bot handles. Events without a reply
    /// token cannot be answered and are dropped as well.
    pub fn into_bot_event(self) -> Option<BotEvent> {
        match self {
            WebhookEvent::Message(MessageEventBody {
                reply_token: Some(reply_token),
                message: EventMessage::Location(location),
                ..
            }) => Some(BotEvent::Location(LocationEvent {
                latitude: location.latitude,
                longitude: location.longitude,
                address: location.address.unwrap_or_default(),
                reply_token,
            })),
            WebhookEvent::Postback(PostbackEventBody {
                reply_token: Some(reply_token),
                postback,
                ..
            }) => Some(BotEvent::Postback(PostbackEvent {
                data: postback.data,
                reply_token,
            })),
            _ => None,
        }
    }
}
