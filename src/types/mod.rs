pub mod app_state;
pub mod bot_event;
pub mod line_webhook;
