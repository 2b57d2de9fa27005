//! League of Legends statistics response models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{RankedEntry, Summoner};

/// Per-role breakdown. Every role seen is reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleStats {
    pub games: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub kda: f64,
    pub avg_impact_score: f64,
}

/// Per-champion breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionStats {
    pub champion_id: i64,
    pub champion_name: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kda: f64,
    pub average_vision_score: f64,
    pub objective_participation: f64,
    pub avg_impact_score: f64,
}

/// Summary of one analyzed match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub match_id: String,
    pub champion_id: i64,
    pub champion_name: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub cs: u32,
    pub role: String,
    pub lane: String,
    pub timestamp: DateTime<Utc>,
}

/// Role, carry and versatility figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickPlayStats {
    pub games: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub role_pref_stats: BTreeMap<String, RoleStats>,
    pub carry_score: f64,
    pub versatility_score: f64,
}

/// Aggregated match statistics for one summoner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kda: f64,
    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,
    #[serde(rename = "averageCS")]
    pub average_cs: f64,
    pub average_vision: f64,
    pub average_damage: f64,
    pub win_rate: f64,
    pub kill_participation: f64,
    pub objective_control: f64,
    pub top_champions: Vec<ChampionStats>,
    pub recent_matches: Vec<MatchDetails>,
    pub quick_play_stats: QuickPlayStats,
}

/// Body of `GET /api/stats/lol`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStatsResponse {
    pub summoner: Option<Summoner>,
    pub ranked: Vec<RankedEntry>,
    pub has_matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub matches: MatchStats,
}
