use std::str::FromStr;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::types::{
    cityglide_arrival::{ArrivalRecord, Bound},
    cityglide_stop::StopCandidate,
    transit_service_error::TransitServiceError,
};

pub const DEFAULT_TRANSIT_API_URL: &str = "http://www.cityglide.com/api.php";

const MODE_NEAREST_STOPS: &str = "get_marker_all_station";
const MODE_ARRIVALS: &str = "get_poly_origin";

/// Candidates with a radius at or above this value are too far away to offer.
/// The unit is whatever the CityGlide API uses for `radius`.
pub const NEAREST_STOP_RADIUS: f64 = 0.1;

pub const ARRIVALS_HEADER: &str = "สายที่กำลังจะเข้ามา: \n";

#[derive(Clone)]
pub struct TransitServiceConfig {
    /// Full URL of the api.php endpoint.
    pub url: String,
}

#[derive(Clone)]
pub struct TransitService {
    config: TransitServiceConfig,
    client: reqwest::Client,
}

pub struct NearestStopInput {
    pub latitude: f64,
    pub longitude: f64,
    pub address: String,
}

#[derive(Serialize)]
struct NearestStopForm<'a> {
    nearest_station: String,
    #[serde(rename = "MODE")]
    mode: &'a str,
    nearest_station_lat: f64,
    nearest_station_lng: f64,
    keyword_station: &'a str,
}

#[derive(Serialize)]
struct ArrivalsForm<'a> {
    origin: &'a str,
    #[serde(rename = "MODE")]
    mode: &'a str,
}

/// Which arrivals make it into the reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundFilter {
    All,
    Only(Bound),
}

impl BoundFilter {
    pub fn accepts(&self, bound: &Bound) -> bool {
        match self {
            BoundFilter::All => true,
            BoundFilter::Only(b) => b == bound,
        }
    }
}

impl Default for BoundFilter {
    fn default() -> Self {
        BoundFilter::Only(Bound::Outbound)
    }
}

impl FromStr for BoundFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(BoundFilter::All),
            "inbound" => Ok(BoundFilter::Only(Bound::Inbound)),
            "outbound" => Ok(BoundFilter::Only(Bound::Outbound)),
            other => Err(format!(
                "unknown bound {:?}, expected inbound, outbound or all",
                other
            )),
        }
    }
}

impl TransitService {
    pub fn new(config: TransitServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Stop candidates around a location, in the order the API returned them.
    pub async fn get_nearest_stops(
        &self,
        input: &NearestStopInput,
    ) -> Result<Vec<StopCandidate>, TransitServiceError> {
        let form = NearestStopForm {
            nearest_station: format!("{}, {}", input.latitude, input.longitude),
            mode: MODE_NEAREST_STOPS,
            nearest_station_lat: input.latitude,
            nearest_station_lng: input.longitude,
            keyword_station: &input.address,
        };

        self.post_form(&form).await
    }

    /// Upcoming buses for a stop, in the order the API returned them.
    pub async fn get_arrivals(
        &self,
        stop_name: &str,
    ) -> Result<Vec<ArrivalRecord>, TransitServiceError> {
        debug!("Fetching arrivals for stop '{}'", stop_name);

        let form = ArrivalsForm {
            origin: stop_name,
            mode: MODE_ARRIVALS,
        };

        self.post_form(&form).await
    }

    async fn post_form<F, T>(&self, form: &F) -> Result<Vec<T>, TransitServiceError>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self.client.post(&self.config.url).form(form).send().await?;

        if resp.status() != StatusCode::OK {
            return Err(TransitServiceError::Status(resp.status()));
        }

        let body = resp.bytes().await?;
        debug!("Transit API response: {}", String::from_utf8_lossy(&body));

        decode_keyed_entries(&body)
    }
}

/// Decodes a JSON object keyed by an opaque id into its values, keeping key
/// order. PHP serializes an empty or sequentially keyed array as a JSON list,
/// so lists are accepted too. Entries that do not match `T` are skipped.
fn decode_keyed_entries<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, TransitServiceError> {
    let entries: Vec<(String, Value)> = match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(list) => list
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        other => {
            return Err(TransitServiceError::Decode(serde::de::Error::custom(
                format!("expected a JSON object, got {}", other),
            )))
        }
    };

    Ok(entries
        .into_iter()
        .filter_map(|(key, value)| match serde_json::from_value::<T>(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping transit API entry '{}': {}", key, e);
                None
            }
        })
        .collect())
}

/// First candidate in response order that is within [`NEAREST_STOP_RADIUS`].
/// Later candidates are not considered even when nearer.
pub fn select_nearest_stop(candidates: &[StopCandidate]) -> Option<&StopCandidate> {
    candidates
        .iter()
        .find(|c| c.radius < NEAREST_STOP_RADIUS)
}

pub fn format_arrivals(arrivals: &[ArrivalRecord], filter: &BoundFilter) -> String {
    arrivals
        .iter()
        .filter(|a| filter.accepts(&a.bound))
        .fold(ARRIVALS_HEADER.to_string(), |mut text, a| {
            text.push_str(&format!("สาย {} รออีก {}\n", a.bus_line, a.duration_text));
            text
        })
}
