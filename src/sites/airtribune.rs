//! Airtribune roster adapter
//!
//! Airtribune embeds the roster in the event page as a JSON array under the
//! literal key `"pilots"`. The array is located by its marker and then read
//! with a streaming JSON deserializer, which bounds it exactly at its closing
//! bracket instead of searching for the first `}]`.

use serde::de::IgnoredAny;
use serde::Deserialize;
use serde_json::Value;

use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::models::Participant;
use crate::parser::normalize::{civl_id_from_json, clean_name, normalize_status};
use crate::utils::error::ParseError;

/// Marker preceding the embedded roster array
pub const PILOTS_MARKER: &str = "\"pilots\": [";

#[derive(Debug, Deserialize)]
struct AirtribunePilot {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    civl_id: Option<Value>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    country: Option<Value>,
}

/// Fetch and parse an Airtribune participants page
pub async fn fetch(fetcher: &SiteFetcher, url: &str) -> Result<Vec<Participant>> {
    let html = fetcher.get_text(url).await?;
    Ok(parse(&html)?)
}

/// Locate the embedded `"pilots"` array and return it as a JSON slice
///
/// # Errors
///
/// - `ParseError::MarkerNotFound` if the marker is absent
/// - `ParseError::MalformedJson` if the array is not valid JSON or unterminated
pub fn extract_pilots_json(html: &str) -> std::result::Result<&str, ParseError> {
    let marker = html
        .find(PILOTS_MARKER)
        .ok_or(ParseError::MarkerNotFound(PILOTS_MARKER))?;

    // Keep the opening bracket of the marker
    let tail = &html[marker + PILOTS_MARKER.len() - 1..];
    let mut stream = serde_json::Deserializer::from_str(tail).into_iter::<IgnoredAny>();

    match stream.next() {
        Some(Ok(_)) => Ok(&tail[..stream.byte_offset()]),
        Some(Err(e)) => Err(ParseError::MalformedJson(e)),
        None => Err(ParseError::MarkerNotFound(PILOTS_MARKER)),
    }
}

/// Remove URL scheme prefixes from the embedded payload
pub fn strip_schemes(json: &str) -> String {
    json.replace("https://", "").replace("http://", "")
}

/// Parse an Airtribune page into canonical participants
///
/// # Errors
///
/// Returns `ParseError` if the roster array cannot be located or decoded
pub fn parse(html: &str) -> std::result::Result<Vec<Participant>, ParseError> {
    let payload = strip_schemes(extract_pilots_json(html)?);
    let pilots: Vec<AirtribunePilot> = serde_json::from_str(&payload)?;

    Ok(pilots
        .into_iter()
        .map(|pilot| {
            Participant::new(
                clean_name(pilot.name.as_deref().unwrap_or_default()),
                civl_id_from_json(pilot.civl_id.as_ref()),
                normalize_status(pilot.status.as_deref().unwrap_or_default()),
            )
            .with_country(text_value(pilot.country.as_ref()))
        })
        .collect())
}

fn text_value(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UNKNOWN_CIVL_ID;

    const PAGE: &str = r#"<html><script>
window.__INITIAL = {"event": {"title": "Winter Open"}, "pilots": [
  {"name": "Alice Smith", "civl_id": 1, "status": "Confirmed", "country": "GBR",
   "photo": "https://cdn.example.org/a.jpg", "tags": [{"id": 1}]},
  {"name": "Bob Jones", "civl_id": null, "status": "Wait list", "country": "FRA"}
], "teams": [{"id": 2}]};
</script></html>"#;

    #[test]
    fn test_extract_bounded_by_array() {
        let json = extract_pilots_json(PAGE).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
        assert!(!json.contains("teams"));
    }

    #[test]
    fn test_parse_page() {
        let roster = parse(PAGE).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "alice smith");
        assert_eq!(roster[0].civl_id, 1);
        assert_eq!(roster[0].status, "confirmed");
        assert_eq!(roster[0].country.as_deref(), Some("GBR"));
        assert_eq!(roster[1].civl_id, UNKNOWN_CIVL_ID);
        assert_eq!(roster[1].status, "wait list");
    }

    #[test]
    fn test_strip_schemes() {
        assert_eq!(
            strip_schemes(r#"{"a": "https://x.org", "b": "http://y.org"}"#),
            r#"{"a": "x.org", "b": "y.org"}"#
        );
    }

    #[test]
    fn test_missing_marker() {
        let result = parse("<html><body>No roster here</body></html>");
        assert!(matches!(result, Err(ParseError::MarkerNotFound(_))));
    }

    #[test]
    fn test_unterminated_array() {
        let result = parse(r#"<script>{"pilots": [{"name": "A", "status": "x"}"#);
        assert!(matches!(result, Err(ParseError::MalformedJson(_))));
    }

    #[test]
    fn test_empty_array() {
        let roster = parse(r#"{"pilots": []}"#).unwrap();
        assert!(roster.is_empty());
    }
}
