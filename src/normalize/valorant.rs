//! Valorant (val match-v1) payloads.

use serde::Deserialize;

use super::{group_key_or_other, NormalizeError};
use crate::calculate::match_kda;
use crate::models::{MatchRecord, ObjectiveEvents, ValMatchDetails};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValorantMatch {
    pub match_info: ValorantMatchInfo,
    #[serde(default)]
    pub players: Vec<ValorantPlayer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValorantMatchInfo {
    pub match_id: String,
    pub map_id: String,
    pub queue_id: String,
    pub game_mode: String,
    /// Milliseconds since the epoch
    pub game_start_millis: i64,
    pub teams: Vec<ValorantTeam>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValorantTeam {
    pub team_id: String,
    pub won: bool,
    pub rounds_won: u32,
    /// Rounds played, despite the name
    pub num_points: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValorantPlayer {
    pub puuid: String,
    pub team_id: String,
    pub character_id: String,
    #[serde(rename = "character")]
    pub character_name: String,
    pub stats: ValorantPlayerStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValorantPlayerStats {
    pub score: u32,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub headshots: u32,
    pub first_bloods: u32,
    pub plants: u32,
    pub defuses: u32,
    pub rounds_played: u32,
}

pub fn parse(payload: &str) -> Result<ValorantMatch, NormalizeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Reduce a val match-v1 payload to the record and summary for `puuid`.
///
/// The outcome comes from the subject's team entry; a match without one
/// is skipped.
pub fn normalize(
    match_id: &str,
    payload: &str,
    puuid: &str,
) -> Result<(MatchRecord, ValMatchDetails), NormalizeError> {
    let game = parse(payload)?;

    let player = game
        .players
        .iter()
        .find(|p| p.puuid == puuid)
        .ok_or(NormalizeError::PlayerNotFound)?;

    let team = game
        .match_info
        .teams
        .iter()
        .find(|t| t.team_id == player.team_id)
        .ok_or(NormalizeError::TeamNotFound)?;

    let team_kills = game
        .players
        .iter()
        .filter(|p| p.team_id == player.team_id)
        .fold(0u32, |total, p| total.saturating_add(p.stats.kills));

    let stats = &player.stats;
    let agent_name = group_key_or_other(&player.character_name, &player.character_id);

    let record = MatchRecord::new(
        match_id,
        agent_name.clone(),
        team.won,
        stats.kills,
        stats.deaths,
        stats.assists,
    )
    .with_team_kills(team_kills)
    .with_objectives(ObjectiveEvents::Valorant {
        plants: stats.plants,
        defuses: stats.defuses,
        first_bloods: stats.first_bloods,
    });

    let details = ValMatchDetails {
        match_id: match_id.to_string(),
        queue_id: game.match_info.queue_id.clone(),
        map_id: game.match_info.map_id.clone(),
        game_start_time: game.match_info.game_start_millis,
        agent_name,
        agent_id: player.character_id.clone(),
        kills: stats.kills,
        deaths: stats.deaths,
        assists: stats.assists,
        kda: match_kda(stats.kills, stats.deaths, stats.assists),
        combat_score: stats.score,
        won: team.won,
        headshots: stats.headshots,
        first_bloods: stats.first_bloods,
        plants: stats.plants,
        defuses: stats.defuses,
        rounds_won: team.rounds_won,
        rounds_total: team.num_points,
    };

    Ok((record, details))
}


#[cfg(test)]
mod tests {
    use super::fixtures::match_payload;
    use super::*;

    #[test]
    fn test_normalize_subject() {
        let payload = match_payload("me", "Jett", "/Game/Maps/Ascent/Ascent", true, 1000, (20, 10, 4));
        let (record, details) = normalize("val-1", &payload, "me").unwrap();

        assert_eq!(record.group_key, "Jett");
        assert!(record.win);
        assert_eq!(record.role, None);
        assert_eq!(record.damage, 0);
        assert_eq!(record.team_kills, 35);
        assert_eq!(
            record.objectives,
            ObjectiveEvents::Valorant {
                plants: 1,
                defuses: 1,
                first_bloods: 2,
            }
        );

        assert_eq!(details.map_id, "/Game/Maps/Ascent/Ascent");
        assert_eq!(details.kda, 2.4);
        assert_eq!(details.combat_score, 5200);
        assert_eq!(details.rounds_won, 13);
        assert_eq!(details.rounds_total, 22);
        assert_eq!(details.game_start_time, 1000);
    }

    #[test]
    fn test_agent_falls_back_to_character_id() {
        let payload = r#"{
            "matchInfo": {"teams": [{"teamId": "Red", "won": false}]},
            "players": [{"puuid": "me", "teamId": "Red", "characterId": "agent-uuid"}]
        }"#;
        let (record, details) = normalize("M1", payload, "me").unwrap();
        assert_eq!(record.group_key, "agent-uuid");
        assert_eq!(details.agent_name, "agent-uuid");
        assert!(!record.win);
    }

    #[test]
    fn test_team_absent_skips_match() {
        let payload = r#"{
            "matchInfo": {"teams": [{"teamId": "Blue", "won": true}]},
            "players": [{"puuid": "me", "teamId": "Neutral", "character": "Sage"}]
        }"#;
        assert!(matches!(
            normalize("M1", payload, "me"),
            Err(NormalizeError::TeamNotFound)
        ));
    }

    #[test]
    fn test_player_absent() {
        let payload = match_payload("other", "Sage", "Bind", true, 0, (1, 1, 1));
        assert!(matches!(
            normalize("M1", &payload, "me"),
            Err(NormalizeError::PlayerNotFound)
        ));
    }
}
