use crate::services::{
    line_client::line_service::LineService,
    transit_service::transit_client::{BoundFilter, TransitService},
};

#[derive(Clone)]
pub struct AppState {
    pub transit_service: TransitService,
    pub line_service: LineService,
    pub channel_secret: String,
    pub arrival_filter: BoundFilter,
}
