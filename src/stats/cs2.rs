//! Counter-Strike 2 statistics from the Steam Web API.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::StatsError;
use crate::fetch::{FetchError, SteamApi};

/// Flattened CS2 stats: stat name to value.
pub type Cs2Stats = BTreeMap<String, Value>;

#[derive(Debug, Deserialize)]
struct UserStatsEnvelope {
    playerstats: Option<PlayerStats>,
}

#[derive(Debug, Deserialize)]
struct PlayerStats {
    stats: Option<Vec<StatEntry>>,
}

#[derive(Debug, Deserialize)]
struct StatEntry {
    name: String,
    #[serde(default)]
    value: Value,
}

/// Fetch CS2 stats for a Steam ID and flatten them into `name -> value`.
pub async fn cs2_stats(steam: &dyn SteamApi, steam_id: &str) -> Result<Cs2Stats, StatsError> {
    let payload = steam
        .cs2_user_stats(steam_id)
        .await
        .map_err(StatsError::Steam)?;

    let flattened = flatten(&payload)?;
    debug!("CS2 stats for {}: {} entries", steam_id, flattened.len());
    Ok(flattened)
}

fn flatten(payload: &str) -> Result<Cs2Stats, StatsError> {
    let envelope: UserStatsEnvelope = serde_json::from_str(payload).map_err(|e| {
        warn!("Unreadable CS2 stats payload: {}", e);
        StatsError::Steam(FetchError::Json(e))
    })?;

    let stats = envelope
        .playerstats
        .ok_or_else(|| StatsError::NoStats("missing playerstats".to_string()))?
        .stats
        .ok_or_else(|| StatsError::NoStats("missing stats".to_string()))?;

    Ok(stats.into_iter().map(|s| (s.name, s.value)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::MockSteamApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_flatten_player_stats() {
        let steam = MockSteamApi::new(
            json!({
                "playerstats": {
                    "steamID": "76561198000000000",
                    "gameName": "ValveTestApp260",
                    "stats": [
                        {"name": "total_kills", "value": 1520},
                        {"name": "total_deaths", "value": 1333},
                        {"name": "total_kills_headshot", "value": 611}
                    ]
                }
            })
            .to_string(),
        );

        let stats = cs2_stats(&steam, "76561198000000000").await.unwrap();
        assert_eq!(stats.len(), 3);
        assert_eq!(stats["total_kills"], json!(1520));
    }

    #[tokio::test]
    async fn test_missing_sections() {
        let steam = MockSteamApi::new(r#"{}"#);
        assert!(matches!(
            cs2_stats(&steam, "1").await,
            Err(StatsError::NoStats(_))
        ));

        let steam = MockSteamApi::new(r#"{"playerstats": {"steamID": "1"}}"#);
        assert!(matches!(
            cs2_stats(&steam, "1").await,
            Err(StatsError::NoStats(_))
        ));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let steam = MockSteamApi::default();
        assert!(matches!(
            cs2_stats(&steam, "1").await,
            Err(StatsError::Steam(_))
        ));

        let steam = MockSteamApi::new("<html>Bad Gateway</html>");
        assert!(matches!(
            cs2_stats(&steam, "1").await,
            Err(StatsError::Steam(FetchError::Json(_)))
        ));
    }
}
