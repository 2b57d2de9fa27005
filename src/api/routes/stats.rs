use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::fetch::{RiotApi, SteamApi};
use crate::models::{LeagueStatsResponse, RiotId, ValorantStatsResponse};
use crate::stats::{self, cs2::Cs2Stats, LeagueLookup};

#[derive(Debug, Default, Deserialize)]
pub struct LolParams {
    pub riot_id: Option<String>,
    pub riot_game_name: Option<String>,
    pub riot_tagline: Option<String>,
    pub riot_puuid: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl LolParams {
    /// PUUID first, then `riot_id`, then game name + tagline.
    pub fn lookup(&self, default_tag: &str) -> Result<LeagueLookup, ApiError> {
        if let Some(puuid) = non_empty(&self.riot_puuid) {
            return Ok(LeagueLookup::Puuid(puuid.to_string()));
        }

        let riot_id = if let Some(raw) = non_empty(&self.riot_id) {
            RiotId::parse(raw, default_tag)
        } else if let Some(name) = non_empty(&self.riot_game_name) {
            RiotId::new(name, non_empty(&self.riot_tagline).unwrap_or(""), default_tag)
        } else {
            return Err(ApiError::BadRequest(
                "Riot account information is required".to_string(),
            ));
        };

        riot_id
            .map(LeagueLookup::RiotId)
            .ok_or_else(|| ApiError::BadRequest("Invalid Riot ID".to_string()))
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RiotIdParams {
    pub riot_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SteamParams {
    pub steam_id: Option<String>,
}

fn riot_client(state: &AppState) -> Result<Arc<dyn RiotApi>, ApiError> {
    state
        .riot
        .clone()
        .ok_or_else(|| ApiError::Internal("Riot API key not configured".to_string()))
}

fn steam_client(state: &AppState) -> Result<Arc<dyn SteamApi>, ApiError> {
    state
        .steam
        .clone()
        .ok_or_else(|| ApiError::Internal("Steam API key not configured".to_string()))
}

pub async fn lol_stats(
    State(state): State<AppState>,
    Query(params): Query<LolParams>,
) -> Result<Json<LeagueStatsResponse>, ApiError> {
    let lookup = params.lookup(&state.config.riot.default_tagline)?;
    let riot = riot_client(&state)?;

    let response = stats::league_stats(riot.as_ref(), &state.config.riot, lookup).await?;
    Ok(Json(response))
}

pub async fn valorant_stats(
    State(state): State<AppState>,
    Query(params): Query<RiotIdParams>,
) -> Result<Json<ValorantStatsResponse>, ApiError> {
    let raw = non_empty(&params.riot_id)
        .ok_or_else(|| ApiError::BadRequest("riot_id is required".to_string()))?;
    let riot_id = RiotId::parse(raw, &state.config.riot.default_tagline)
        .ok_or_else(|| ApiError::BadRequest("Invalid Riot ID".to_string()))?;
    let riot = riot_client(&state)?;

    let response = stats::valorant_stats(riot.as_ref(), &state.config.riot, &riot_id).await?;
    Ok(Json(response))
}

pub async fn cs2_stats(
    State(state): State<AppState>,
    Query(params): Query<SteamParams>,
) -> Result<Json<Cs2Stats>, ApiError> {
    let steam_id = non_empty(&params.steam_id)
        .ok_or_else(|| ApiError::BadRequest("steam_id is required".to_string()))?;
    let steam = steam_client(&state)?;

    let response = stats::cs2_stats(steam.as_ref(), steam_id).await?;
    Ok(Json(response))
}
