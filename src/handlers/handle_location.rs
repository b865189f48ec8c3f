use tracing::{error, info};

use crate::{
    services::{
        line_client::types::line_service_error::LineServiceError,
        transit_service::transit_client::{select_nearest_stop, NearestStopInput},
    },
    types::{app_state::AppState, bot_event::LocationEvent},
};

use super::reply_composer::compose_stop_reply;

pub async fn handle_location(
    state: &AppState,
    event: LocationEvent,
) -> Result<(), LineServiceError> {
    let input = NearestStopInput {
        latitude: event.latitude,
        longitude: event.longitude,
        address: event.address,
    };

    let candidates = state
        .transit_service
        .get_nearest_stops(&input)
        .await
        .unwrap_or_else(|e| {
            error!("Failed to fetch nearest stops: {}", e);
            Vec::new()
        });

    let messages = match select_nearest_stop(&candidates) {
        Some(stop) => {
            info!("Nearest stop: {} ({})", stop.stop_name, stop.stop_id);
            compose_stop_reply(stop)
        }
        None => {
            info!(
                "No stop near {}, {} out of {} candidates",
                input.latitude,
                input.longitude,
                candidates.len()
            );
            return Ok(());
        }
    };

    state.line_service.reply(&event.reply_token, messages).await
}
