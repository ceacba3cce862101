//! HTTP fetcher for competition roster pages
//!
//! A thin wrapper around one `reqwest::Client`. No retry and no rate limiting:
//! a failed request aborts the run.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE},
    Client,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use crate::config::FetchConfig;
use crate::utils::error::{FetchError, ParseError};

/// Roster page fetcher
#[derive(Debug, Clone)]
pub struct SiteFetcher {
    /// HTTP client with configured timeout, user agent and compression
    client: Client,
}

impl SiteFetcher {
    /// Create a new fetcher from fetch settings
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Self::with_config(&config.user_agent, config.request_timeout())
    }

    /// Create a new fetcher with explicit user agent and timeout
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Http` if the HTTP client cannot be created
    pub fn with_config(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(user_agent.to_string())
            .default_headers(Self::default_headers())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch a URL and return the body as text
    ///
    /// # Errors
    ///
    /// - `FetchError::InvalidUrl` if `url` does not parse
    /// - `FetchError::Status` on a non-2xx response
    /// - `FetchError::Timeout` / `FetchError::Http` on transport failure
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::debug!(url = %parsed, "Fetching roster page");

        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: parsed.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::classify)?;
        tracing::debug!(url = %parsed, bytes = body.len(), "Fetched roster page");
        Ok(body)
    }

    /// Fetch a URL and deserialize the JSON body
    ///
    /// # Errors
    ///
    /// - `Error::Fetch` for any failure `get_text` reports
    /// - `Error::Parse` (`ParseError::MalformedJson`) if the body does not
    ///   deserialize into `T`
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> crate::error::Result<T> {
        let body = self.get_text(url).await?;
        let value = serde_json::from_str(&body).map_err(ParseError::MalformedJson)?;
        Ok(value)
    }

    fn classify(err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Http(err)
        }
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/json;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = SiteFetcher::new(&FetchConfig::default());
        assert!(fetcher.is_ok());

        let fetcher = SiteFetcher::with_config("compstrength-test", Duration::from_secs(5));
        assert!(fetcher.is_ok());
    }

    #[test]
    fn test_default_headers() {
        let headers = SiteFetcher::default_headers();
        assert!(headers.contains_key(ACCEPT));
        assert!(headers.contains_key(ACCEPT_LANGUAGE));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let fetcher = SiteFetcher::new(&FetchConfig::default()).unwrap();
        let result = fetcher.get_text("not a url").await;
        assert!(matches!(result, Err(FetchError::InvalidUrl(_))));

        let result = fetcher.get_json::<serde_json::Value>("not a url").await;
        assert!(matches!(
            result,
            Err(crate::error::Error::Fetch(FetchError::InvalidUrl(_)))
        ));
    }
}
