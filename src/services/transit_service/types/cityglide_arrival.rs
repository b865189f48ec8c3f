use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::utils::lenient_number::{string_from_text_or_number, string_or_empty};

pub const INBOUND: &str = "ขาเข้า";
pub const OUTBOUND: &str = "ขาออก";

/// Direction of travel as labelled by the CityGlide API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound {
    Inbound,
    Outbound,
    Other(String),
}

impl Bound {
    pub fn as_str(&self) -> &str {
        match self {
            Bound::Inbound => INBOUND,
            Bound::Outbound => OUTBOUND,
            Bound::Other(s) => s,
        }
    }
}

impl From<&str> for Bound {
    fn from(label: &str) -> Self {
        match label.trim() {
            INBOUND => Bound::Inbound,
            OUTBOUND => Bound::Outbound,
            other => Bound::Other(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = string_or_empty(deserializer)?;
        Ok(Bound::from(label.as_str()))
    }
}

impl Serialize for Bound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One entry of the `get_poly_origin` response object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ArrivalRecord {
    #[serde(deserialize_with = "string_from_text_or_number")]
    pub bus_line: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub duration_text: String,
    #[serde(default = "unknown_bound")]
    pub bound: Bound,
}

fn unknown_bound() -> Bound {
    Bound::Other(String::new())
}
