//! PWCA roster adapter
//!
//! The PWCA API serves subscriptions per gender. Both pages are fetched
//! concurrently and concatenated, men first.

use serde::Deserialize;
use serde_json::Value;
use url::Url;

use crate::crawler::SiteFetcher;
use crate::error::Result;
use crate::models::Participant;
use crate::parser::normalize::{civl_id_from_json, clean_name, normalize_status};
use crate::utils::error::{FetchError, ParseError};

/// Values of the `gender` query parameter, in concatenation order
pub const GENDERS: [&str; 2] = ["male", "female"];

/// One per-gender subscriptions response
#[derive(Debug, Deserialize)]
pub struct SubscriptionsPage {
    subscriptions: Option<Vec<Subscription>>,
}

#[derive(Debug, Deserialize)]
struct Subscription {
    #[serde(default)]
    pilot: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    country: Option<Value>,
    #[serde(default)]
    civl_id: Option<Value>,
}

/// Build the per-gender endpoint URL
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` if `base` does not parse
pub fn gender_url(base: &str, gender: &str) -> std::result::Result<String, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{base}: {e}")))?;
    url.query_pairs_mut().append_pair("gender", gender);
    Ok(url.into())
}

/// Fetch both gender pages and parse them into one roster
pub async fn fetch(fetcher: &SiteFetcher, url: &str) -> Result<Vec<Participant>> {
    let male_url = gender_url(url, GENDERS[0])?;
    let female_url = gender_url(url, GENDERS[1])?;

    let (male, female) = tokio::try_join!(
        fetcher.get_json::<SubscriptionsPage>(&male_url),
        fetcher.get_json::<SubscriptionsPage>(&female_url)
    )?;

    let mut roster = participants(male)?;
    roster.extend(participants(female)?);
    Ok(roster)
}

/// Parse one subscriptions response
///
/// # Errors
///
/// - `ParseError::MalformedJson` if the body is not JSON of the expected shape
/// - `ParseError::MissingField` if `subscriptions` is absent
pub fn parse(body: &str) -> std::result::Result<Vec<Participant>, ParseError> {
    participants(serde_json::from_str(body)?)
}

/// Map a decoded subscriptions response to participants
///
/// # Errors
///
/// Returns `ParseError::MissingField` if `subscriptions` is absent
pub fn participants(page: SubscriptionsPage) -> std::result::Result<Vec<Participant>, ParseError> {
    let subscriptions = page
        .subscriptions
        .ok_or(ParseError::MissingField("subscriptions"))?;

    Ok(subscriptions
        .into_iter()
        .map(|sub| {
            let country = match sub.country {
                Some(Value::String(s)) if !s.is_empty() => Some(s),
                _ => None,
            };
            Participant::new(
                clean_name(sub.pilot.as_deref().unwrap_or_default()),
                civl_id_from_json(sub.civl_id.as_ref()),
                normalize_status(sub.status.as_deref().unwrap_or_default()),
            )
            .with_country(country)
        })
        .collect())
}
