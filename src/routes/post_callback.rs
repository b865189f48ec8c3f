use crate::{
    handlers::handle_event,
    types::{app_state::AppState, line_webhook::WebhookBody},
    utils::app_error::AppError,
};
use axum::{body::Bytes, extract::State};
#[cfg(test)]
use axum_macros::debug_handler;
use futures::future::join_all;
use tracing::{debug, info, warn};

/// Webhook endpoint. Runs after the signature check; always acknowledges a
/// well formed delivery, whatever happens while answering its events.
#[cfg_attr(test, debug_handler)]
pub async fn post_callback(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<&'static str, AppError> {
    info!("Request body: {}", String::from_utf8_lossy(&body));

    let webhook = serde_json::from_slice::<WebhookBody>(&body).map_err(|e| {
        warn!("Failed to parse webhook body: {}", e);
        AppError::bad_request("Invalid webhook body")
    })?;

    let events = webhook
        .events
        .into_iter()
        .filter_map(|event| {
            if let Some(received_at) = event.received_at() {
                debug!("Event received at {}", received_at.to_rfc3339());
            }

            let bot_event = event.into_bot_event();
            if bot_event.is_none() {
                debug!("Ignoring unsupported event");
            }
            bot_event
        })
        .collect::<Vec<_>>();

    join_all(events.into_iter().map(|event| handle_event(&state, event))).await;

    Ok("OK")
}
