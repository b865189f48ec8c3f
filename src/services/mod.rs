pub mod line_client;
pub mod transit_service;
