pub mod line_error_response;
pub mod line_messages;
pub mod line_service_error;
