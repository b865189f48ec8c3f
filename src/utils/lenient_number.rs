//! Serde helpers for the CityGlide API, which sends numbers either as JSON
//! numbers or as strings depending on the endpoint.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

pub fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Integer(i64),
    Float(f64),
}

pub fn string_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Integer(n) => n.to_string(),
        TextOrNumber::Float(n) => n.to_string(),
    })
}

/// Like [`string_from_text_or_number`] but maps `null` to an empty string.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<TextOrNumber>::deserialize(deserializer)? {
            Some(TextOrNumber::Text(s)) => s,
            Some(TextOrNumber::Integer(n)) => n.to_string(),
            Some(TextOrNumber::Float(n)) => n.to_string(),
            None => String::new(),
        },
    )
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "f64_from_number_or_string")]
        radius: f64,
        #[serde(deserialize_with = "string_from_text_or_number")]
        line: String,
        #[serde(default, deserialize_with = "string_or_empty")]
        summary: String,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let a: Sample =
            serde_json::from_str(r#"{"radius": 0.05, "line": 29, "summary": "29, 34"}"#).unwrap();
        let b: Sample =
            serde_json::from_str(r#"{"radius": " 0.05", "line": "29", "summary": null}"#).unwrap();

        assert_eq!(a.radius, 0.05);
        assert_eq!(b.radius, 0.05);
        assert_eq!(a.line, "29");
        assert_eq!(b.line, "29");
        assert_eq!(a.summary, "29, 34");
        assert_eq!(b.summary, "");
    }

    #[test]
    fn missing_summary_defaults_to_empty() {
        let s: Sample = serde_json::from_str(r#"{"radius": 1, "line": "A1"}"#).unwrap();

        assert_eq!(s.summary, "");
    }

    #[test]
    fn rejects_non_numeric_radius() {
        let res = serde_json::from_str::<Sample>(r#"{"radius": "far", "line": "1"}"#);

        assert!(res.is_err());
    }
}
