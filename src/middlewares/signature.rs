use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, signature::verify_signature},
};

pub const SIGNATURE_HEADER: &str = "x-line-signature";

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Rejects webhook deliveries whose body was not signed with the channel
/// secret. The buffered body is handed on to the route unchanged.
pub async fn signature_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let signature = match request
        .headers()
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
    {
        Some(s) => s.to_owned(),
        None => {
            warn!("Rejected webhook without {} header", SIGNATURE_HEADER);
            return Err(AppError::bad_request("Missing signature"));
        }
    };

    let (parts, body) = request.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES).await.map_err(|e| {
        warn!("Failed to read webhook body: {}", e);
        AppError::bad_request("Unreadable body")
    })?;

    if !verify_signature(&state.channel_secret, &signature, &body) {
        warn!("Rejected webhook with invalid signature");
        return Err(AppError::bad_request(
            "Invalid signature. Please check your channel access token/channel secret.",
        ));
    }

    Ok(next.run(Request::from_parts(parts, Body::from(body))).await)
}
