//! Riot Games account and profile types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Riot titles with match-history support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    League,
    Valorant,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::League => write!(f, "League of Legends"),
            Game::Valorant => write!(f, "Valorant"),
        }
    }
}

/// Account-v1 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiotAccount {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
}

/// Summoner-v4 response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    pub puuid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub revision_date: i64,
    #[serde(default)]
    pub summoner_level: i64,
}

/// League-v4 ranked queue entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(default)]
    pub queue_type: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub rank: String,
    #[serde(default)]
    pub league_points: i64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summoner_tolerates_missing_fields() {
        let summoner: Summoner =
            serde_json::from_str(r#"{"puuid": "abc", "summonerLevel": 312}"#).unwrap();

        assert_eq!(summoner.puuid, "abc");
        assert_eq!(summoner.summoner_level, 312);
        assert!(summoner.name.is_empty());
    }

    #[test]
    fn test_ranked_entry_camel_case() {
        let entry: RankedEntry = serde_json::from_str(
            r#"{"queueType": "RANKED_SOLO_5x5", "tier": "GOLD", "rank": "II", "leaguePoints": 47, "wins": 30, "losses": 28}"#,
        )
        .unwrap();

        assert_eq!(entry.queue_type, "RANKED_SOLO_5x5");
        assert_eq!(entry.league_points, 47);
    }

    #[test]
    fn test_game_display() {
        assert_eq!(Game::League.to_string(), "League of Legends");
        assert_eq!(serde_json::to_string(&Game::Valorant).unwrap(), "\"valorant\"");
    }
}
