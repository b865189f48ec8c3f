pub mod transit_client;
pub mod types;
