pub mod cityglide_arrival;
pub mod cityglide_stop;
pub mod transit_service_error;
