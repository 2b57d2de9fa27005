//! Upstream provider clients.
//!
//! Each provider sits behind an async trait so the stats pipeline and the
//! HTTP handlers can run against an in-memory double in tests.

pub mod riot;
pub mod steam;

pub use riot::{RiotApi, RiotClient};
pub use steam::{SteamApi, SteamClient};

#[cfg(test)]
pub use riot::MockRiotApi;
#[cfg(test)]
pub use steam::MockSteamApi;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use thiserror::Error;
use url::Url;

/// Errors that can occur while talking to an upstream provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limited by {host}, retry after {retry_after_secs}s")]
    RateLimited { host: String, retry_after_secs: u64 },

    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

impl FetchError {
    /// True when the upstream answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::HttpStatus { status: 404, .. })
    }
}

const CLIENT_USER_AGENT: &str = concat!("elo-insight/", env!("CARGO_PKG_VERSION"));

/// Build a shared HTTP client with the given timeout and extra headers.
pub(crate) fn build_client(timeout_seconds: u64, mut headers: HeaderMap) -> Result<Client, FetchError> {
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Join a base URL with path segments, percent-encoding each segment.
pub(crate) fn endpoint(base: &str, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = Url::parse(base).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Map rate limiting and non-success statuses to errors.
pub(crate) fn check_status(url: &Url, response: Response) -> Result<Response, FetchError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);

        return Err(FetchError::RateLimited {
            host: url.host_str().unwrap_or("unknown").to_string(),
            retry_after_secs: retry_after,
        });
    }

    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let url = endpoint(
            "https://americas.api.riotgames.com",
            &["riot", "account", "v1", "accounts", "by-riot-id", "Faker Jr", "KR 1"],
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "https://americas.api.riotgames.com/riot/account/v1/accounts/by-riot-id/Faker%20Jr/KR%201"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://127.0.0.1:9000/proxy/", &["lol", "match"]).unwrap();
        assert_eq!(url.path(), "/proxy/lol/match");
    }

    #[test]
    fn test_endpoint_rejects_bad_base() {
        assert!(matches!(
            endpoint("not a url", &["x"]),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_not_found_detection() {
        let err = FetchError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(err.is_not_found());

        let err = FetchError::RateLimited {
            host: "na1.api.riotgames.com".to_string(),
            retry_after_secs: 10,
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("retry after 10s"));
    }
}
