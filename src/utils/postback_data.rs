//! Key/value codec for the `data` string carried by postback actions.
//!
//! Pairs are written as `key=value` joined by `&`. Only `%`, `&` and `=` are
//! percent-escaped so Thai stop names stay readable and short enough for the
//! 300 character limit LINE puts on postback data.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostbackData {
    pairs: Vec<(String, String)>,
}

impl PostbackData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Parses a postback data string. Never fails: pairs without `=` get an
    /// empty value and malformed escapes are kept as they are.
    pub fn parse(data: &str) -> Self {
        let pairs = data
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (unescape(key), unescape(value)),
                None => (unescape(pair), String::new()),
            })
            .collect();

        PostbackData { pairs }
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn encode(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PostbackData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", escape(key), escape(value))?;
        }
        Ok(())
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            _ => out.push(c),
        }
    }
    out
}

fn unescape(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_string();
    }

    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_legacy_confirmation_data() {
        let data = PostbackData::parse("answer=YES&stop_name=อนุสาวรีย์ชัยสมรภูมิ");

        assert_eq!(data.get("answer"), Some("YES"));
        assert_eq!(data.get("stop_name"), Some("อนุสาวรีย์ชัยสมรภูมิ"));
        assert_eq!(data.get("missing"), None);
    }

    #[test]
    fn value_keeps_everything_after_the_first_equals() {
        let data = PostbackData::parse("answer=YES&stop_name=Gate=2");

        assert_eq!(data.get("stop_name"), Some("Gate=2"));
    }

    #[test]
    fn delimiters_inside_values_survive_encoding() {
        let encoded = PostbackData::new()
            .with("answer", "YES")
            .with("stop_name", "Silom & Sathorn = 100%")
            .encode();

        assert_eq!(
            encoded,
            "answer=YES&stop_name=Silom %26 Sathorn %3D 100%25"
        );

        let decoded = PostbackData::parse(&encoded);
        assert_eq!(decoded.get("stop_name"), Some("Silom & Sathorn = 100%"));
    }

    #[test]
    fn plain_values_are_written_verbatim() {
        let encoded = PostbackData::new()
            .with("answer", "YES")
            .with("stop_name", "สยาม")
            .encode();

        assert_eq!(encoded, "answer=YES&stop_name=สยาม");
    }

    #[test]
    fn tolerates_odd_input() {
        let data = PostbackData::parse("flag&&answer=NO&broken=%zz");

        assert_eq!(data.get("flag"), Some(""));
        assert_eq!(data.get("answer"), Some("NO"));
        assert_eq!(data.get("broken"), Some("%zz"));
    }
}
