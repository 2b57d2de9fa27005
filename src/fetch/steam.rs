//! Steam Web API client.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use tracing::debug;

use super::{build_client, check_status, endpoint, FetchError};
use crate::config::SteamConfig;

/// Counter-Strike 2 app ID on Steam.
pub const CS2_APP_ID: u32 = 730;

#[async_trait]
pub trait SteamApi: Send + Sync {
    /// Raw `GetUserStatsForGame` payload for CS2.
    async fn cs2_user_stats(&self, steam_id: &str) -> Result<String, FetchError>;
}

/// HTTP implementation of [`SteamApi`].
pub struct SteamClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SteamClient {
    pub fn new(config: &SteamConfig, api_key: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config.timeout_seconds, HeaderMap::new())?,
            base_url: config.base_url.clone(),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl SteamApi for SteamClient {
    async fn cs2_user_stats(&self, steam_id: &str) -> Result<String, FetchError> {
        let mut url = endpoint(
            &self.base_url,
            &["ISteamUserStats", "GetUserStatsForGame", "v0002", ""],
        )?;
        // The key travels in the query string; log the path only.
        debug!("GET {} steamid={}", url.path(), steam_id);
        url.query_pairs_mut()
            .append_pair("appid", &CS2_APP_ID.to_string())
            .append_pair("key", &self.api_key)
            .append_pair("steamid", steam_id);

        // reqwest errors echo the request URL, which carries the key.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;
        let response = check_status(&url, response)?;
        response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))
    }
}

/// In-memory Steam API for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockSteamApi {
    payload: Option<String>,
}

#[cfg(test)]
impl MockSteamApi {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: Some(payload.into()),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl SteamApi for MockSteamApi {
    async fn cs2_user_stats(&self, _steam_id: &str) -> Result<String, FetchError> {
        self.payload.clone().ok_or(FetchError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        })
    }
}
