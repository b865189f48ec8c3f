pub mod line_service;
pub mod types;
