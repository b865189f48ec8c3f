use tracing::error;

use crate::{
    services::line_client::types::line_service_error::LineServiceError,
    types::{app_state::AppState, bot_event::BotEvent},
};

pub mod handle_location;
pub mod handle_postback;
pub mod reply_composer;

/// Runs the handler for one event. Failures are logged and never reach the
/// webhook response.
pub async fn handle_event(state: &AppState, event: BotEvent) {
    let result = match event {
        BotEvent::Location(location) => handle_location::handle_location(state, location).await,
        BotEvent::Postback(postback) => handle_postback::handle_postback(state, postback).await,
    };

    if let Err(e) = result {
        error!("Got exception from LINE Messaging API: {}", e);

        if let LineServiceError::Api { details, .. } = &e {
            for d in details {
                error!("  {}: {}", d.property, d.message);
            }
        }
    }
}
