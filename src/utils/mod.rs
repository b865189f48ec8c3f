pub mod app_error;
pub mod lenient_number;
pub mod postback_data;
pub mod signature;
