use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineErrorDetail {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub message: String,
}

/// Error body returned by the Messaging API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LineErrorResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Vec<LineErrorDetail>,
}
