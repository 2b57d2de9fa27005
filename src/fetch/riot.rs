//! Riot Games API client.
//!
//! Account lookups and League match lists go to the regional host, summoner
//! and ranked data to the platform host, and Valorant match data to the
//! Valorant shard host.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{build_client, check_status, endpoint, FetchError};
use crate::config::RiotConfig;
use crate::models::{Game, RankedEntry, RiotAccount, RiotId, Summoner};

/// Riot endpoints used by the stats pipeline.
#[async_trait]
pub trait RiotApi: Send + Sync {
    /// Resolve `GameName#TAG` to an account (PUUID).
    async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<RiotAccount, FetchError>;

    async fn summoner_by_puuid(&self, puuid: &str) -> Result<Summoner, FetchError>;

    async fn ranked_entries(&self, puuid: &str) -> Result<Vec<RankedEntry>, FetchError>;

    /// Most recent match IDs, newest first, at most `count`.
    async fn match_ids(&self, game: Game, puuid: &str, count: usize)
        -> Result<Vec<String>, FetchError>;

    /// Raw match payload. Parsing is left to the normalizers.
    async fn match_detail(&self, game: Game, match_id: &str) -> Result<String, FetchError>;
}

/// Valorant matchlist response.
#[derive(Debug, Deserialize)]
struct ValorantMatchList {
    #[serde(default)]
    history: Vec<ValorantMatchListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValorantMatchListEntry {
    match_id: String,
}

/// HTTP implementation of [`RiotApi`].
pub struct RiotClient {
    client: Client,
    platform_url: String,
    regional_url: String,
    valorant_url: String,
}

impl RiotClient {
    pub fn new(config: &RiotConfig, api_key: &str) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(api_key)?;
        token.set_sensitive(true);
        headers.insert("X-Riot-Token", token);

        Ok(Self {
            client: build_client(config.timeout_seconds, headers)?,
            platform_url: config.platform_url.clone(),
            regional_url: config.regional_url.clone(),
            valorant_url: config.valorant_url.clone(),
        })
    }

    async fn get(&self, url: Url) -> Result<String, FetchError> {
        debug!("GET {}", url.path());
        let response = self.client.get(url.clone()).send().await?;
        let response = check_status(&url, response)?;
        Ok(response.text().await?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let body = self.get(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl RiotApi for RiotClient {
    async fn account_by_riot_id(&self, riot_id: &RiotId) -> Result<RiotAccount, FetchError> {
        let url = endpoint(
            &self.regional_url,
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-riot-id",
                &riot_id.game_name,
                &riot_id.tag_line,
            ],
        )?;
        self.get_json(url).await
    }

    async fn summoner_by_puuid(&self, puuid: &str) -> Result<Summoner, FetchError> {
        let url = endpoint(
            &self.platform_url,
            &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
        )?;
        self.get_json(url).await
    }

    async fn ranked_entries(&self, puuid: &str) -> Result<Vec<RankedEntry>, FetchError> {
        let url = endpoint(
            &self.platform_url,
            &["lol", "league", "v4", "entries", "by-puuid", puuid],
        )?;
        self.get_json(url).await
    }

    async fn match_ids(
        &self,
        game: Game,
        puuid: &str,
        count: usize,
    ) -> Result<Vec<String>, FetchError> {
        match game {
            Game::League => {
                let mut url = endpoint(
                    &self.regional_url,
                    &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
                )?;
                url.query_pairs_mut()
                    .append_pair("count", &count.to_string());
                let mut ids: Vec<String> = self.get_json(url).await?;
                ids.truncate(count);
                Ok(ids)
            }
            Game::Valorant => {
                let url = endpoint(
                    &self.valorant_url,
                    &["val", "match", "v1", "matchlists", "by-puuid", puuid],
                )?;
                let list: ValorantMatchList = self.get_json(url).await?;
                Ok(list
                    .history
                    .into_iter()
                    .take(count)
                    .map(|entry| entry.match_id)
                    .collect())
            }
        }
    }

    async fn match_detail(&self, game: Game, match_id: &str) -> Result<String, FetchError> {
        let url = match game {
            Game::League => endpoint(
                &self.regional_url,
                &["lol", "match", "v5", "matches", match_id],
            )?,
            Game::Valorant => endpoint(
                &self.valorant_url,
                &["val", "match", "v1", "matches", match_id],
            )?,
        };
        self.get(url).await
    }
}

/// In-memory Riot API for testing.
#[cfg(test)]
#[derive(Default)]
pub struct MockRiotApi {
    account: Option<RiotAccount>,
    summoner: Option<Summoner>,
    ranked: Vec<RankedEntry>,
    match_ids: Option<Vec<String>>,
    details: std::collections::HashMap<String, String>,
    delays: std::collections::HashMap<String, std::time::Duration>,
    in_flight: std::sync::atomic::AtomicUsize,
    peak_in_flight: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockRiotApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, puuid: &str, game_name: &str, tag_line: &str) -> Self {
        self.account = Some(RiotAccount {
            puuid: puuid.to_string(),
            game_name: game_name.to_string(),
            tag_line: tag_line.to_string(),
        });
        self
    }

    pub fn with_summoner(mut self, summoner: Summoner) -> Self {
        self.summoner = Some(summoner);
        self
    }

    pub fn with_ranked(mut self, ranked: Vec<RankedEntry>) -> Self {
        self.ranked = ranked;
        self
    }

    /// Match list returned for every game. Without this the list lookup fails.
    pub fn with_match_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.match_ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Payload for one match. IDs without a payload answer 404.
    pub fn with_match(mut self, match_id: &str, payload: impl Into<String>) -> Self {
        self.details.insert(match_id.to_string(), payload.into());
        self
    }

    /// Hold the detail request for `match_id` open for `delay`.
    pub fn with_delay(mut self, match_id: &str, delay: std::time::Duration) -> Self {
        self.delays.insert(match_id.to_string(), delay);
        self
    }

    /// Highest number of detail requests seen in flight at once.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn not_found() -> FetchError {
        FetchError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl RiotApi for MockRiotApi {
    async fn account_by_riot_id(&self, _riot_id: &RiotId) -> Result<RiotAccount, FetchError> {
        self.account.clone().ok_or_else(Self::not_found)
    }

    async fn summoner_by_puuid(&self, _puuid: &str) -> Result<Summoner, FetchError> {
        self.summoner.clone().ok_or_else(Self::not_found)
    }

    async fn ranked_entries(&self, _puuid: &str) -> Result<Vec<RankedEntry>, FetchError> {
        Ok(self.ranked.clone())
    }

    async fn match_ids(
        &self,
        _game: Game,
        _puuid: &str,
        count: usize,
    ) -> Result<Vec<String>, FetchError> {
        let mut ids = self.match_ids.clone().ok_or_else(|| FetchError::HttpStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        })?;
        ids.truncate(count);
        Ok(ids)
    }

    async fn match_detail(&self, _game: Game, match_id: &str) -> Result<String, FetchError> {
        use std::sync::atomic::Ordering;

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        match self.delays.get(match_id) {
            Some(delay) => tokio::time::sleep(*delay).await,
            None => tokio::task::yield_now().await,
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.details.get(match_id).cloned().ok_or_else(Self::not_found)
    }
}
