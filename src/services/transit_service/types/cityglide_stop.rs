use serde::{Deserialize, Serialize};

use crate::utils::lenient_number::{
    f64_from_number_or_string, string_from_text_or_number, string_or_empty,
};

/// One entry of the `get_marker_all_station` response object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StopCandidate {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub stop_id: String,
    #[serde(deserialize_with = "string_from_text_or_number")]
    pub stop_name: String,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub latitude: f64,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub longitude: f64,
    #[serde(deserialize_with = "f64_from_number_or_string")]
    pub radius: f64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub bus_line_inbound: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub bus_line_outbound: String,
}
