//! Valorant statistics response models.

use serde::{Deserialize, Serialize};

use super::RiotAccount;

/// Per-agent breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStats {
    pub agent_name: String,
    pub agent_id: String,
    pub matches: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub kda: f64,
    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,
    pub avg_impact_score: f64,
}

/// Per-map breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapStats {
    pub name: String,
    pub games: u32,
    pub wins: u32,
    pub win_rate: f64,
    pub rounds: u64,
    pub rounds_won: u64,
    pub total_kills: u64,
}

/// Summary of one analyzed match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValMatchDetails {
    pub match_id: String,
    pub queue_id: String,
    pub map_id: String,
    pub game_start_time: i64,
    pub agent_name: String,
    pub agent_id: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub kda: f64,
    pub combat_score: u32,
    pub won: bool,
    pub headshots: u32,
    pub first_bloods: u32,
    pub plants: u32,
    pub defuses: u32,
    pub rounds_won: u32,
    pub rounds_total: u32,
}

/// Aggregated match statistics for one Valorant player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValorantMatchStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub headshots: u64,
    pub total_combat_score: u64,
    pub first_bloods: u64,
    pub plants: u64,
    pub defuses: u64,
    pub kda: f64,
    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,
    pub average_combat_score: f64,
    pub average_headshots: f64,
    pub headshot_percentage: f64,
    pub first_blood_percentage: f64,
    pub plant_percentage: f64,
    pub defuse_percentage: f64,
    pub win_rate: f64,
    pub kill_participation: f64,
    pub objective_control: f64,
    pub top_agents: Vec<AgentStats>,
    pub map_stats: Vec<MapStats>,
    pub recent_matches: Vec<ValMatchDetails>,
}

/// Body of `GET /api/stats/valorant`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValorantStatsResponse {
    pub account: RiotAccount,
    pub has_matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub matches: ValorantMatchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valorant_stats_wire_names() {
        let json = serde_json::to_value(ValorantMatchStats::default()).unwrap();

        assert_eq!(json["totalGames"], 0);
        assert!(json.get("headshotPercentage").is_some());
        assert!(json["topAgents"].is_array());
        assert!(json["mapStats"].is_array());
    }
}
