use tracing::{debug, error};

use crate::{
    services::{
        line_client::types::{line_messages::SendMessage, line_service_error::LineServiceError},
        transit_service::transit_client::format_arrivals,
    },
    types::{app_state::AppState, bot_event::PostbackEvent},
    utils::postback_data::PostbackData,
};

use super::reply_composer::{ANSWER_KEY, ANSWER_YES, STOP_NAME_KEY};

pub async fn handle_postback(
    state: &AppState,
    event: PostbackEvent,
) -> Result<(), LineServiceError> {
    let data = PostbackData::parse(&event.data);

    let stop_name = match (data.get(ANSWER_KEY), data.get(STOP_NAME_KEY)) {
        (Some(ANSWER_YES), Some(stop_name)) => stop_name,
        _ => {
            debug!("Ignoring postback '{}'", event.data);
            return Ok(());
        }
    };

    // an upstream failure still sends the (empty) text
    let text = match state.transit_service.get_arrivals(stop_name).await {
        Ok(arrivals) => format_arrivals(&arrivals, &state.arrival_filter),
        Err(e) => {
            error!("Failed to fetch arrivals for '{}': {}", stop_name, e);
            String::new()
        }
    };

    state
        .line_service
        .reply(&event.reply_token, vec![SendMessage::Text { text }])
        .await
}
