//! League of Legends (match-v5) payloads.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{group_key_or_other, NormalizeError};
use crate::models::{MatchDetails, MatchRecord, ObjectiveEvents};

#[derive(Debug, Deserialize)]
pub struct LeagueMatch {
    #[serde(default)]
    pub metadata: LeagueMetadata,
    pub info: LeagueMatchInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMetadata {
    #[serde(default)]
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueMatchInfo {
    /// Milliseconds since the epoch
    #[serde(default)]
    pub game_creation: i64,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Participant {
    pub puuid: String,
    pub team_id: i64,
    pub champion_id: i64,
    pub champion_name: String,
    pub role: String,
    pub lane: String,
    pub win: bool,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub total_minions_killed: u32,
    pub neutral_minions_killed: u32,
    pub vision_score: u32,
    pub total_damage_dealt_to_champions: u32,
    pub dragon_kills: u32,
    pub baron_kills: u32,
    pub turret_kills: u32,
    pub objectives_stolen: u32,
    pub objectives_stolen_assists: u32,
}

impl Participant {
    fn objective_events(&self) -> ObjectiveEvents {
        ObjectiveEvents::League {
            dragon_kills: self.dragon_kills,
            baron_kills: self.baron_kills,
            turret_kills: self.turret_kills,
            objectives_stolen: self.objectives_stolen,
            objectives_stolen_assists: self.objectives_stolen_assists,
        }
    }
}

pub fn parse(payload: &str) -> Result<LeagueMatch, NormalizeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Reduce a match-v5 payload to the record and summary for `puuid`.
pub fn normalize(
    match_id: &str,
    payload: &str,
    puuid: &str,
) -> Result<(MatchRecord, MatchDetails), NormalizeError> {
    let game = parse(payload)?;
    let info = &game.info;

    let player = info
        .participants
        .iter()
        .find(|p| p.puuid == puuid)
        .ok_or(NormalizeError::PlayerNotFound)?;

    let team_kills = info
        .participants
        .iter()
        .filter(|p| p.team_id == player.team_id)
        .fold(0u32, |total, p| total.saturating_add(p.kills));

    let cs = player.total_minions_killed;
    let role = group_key_or_other(&player.role, &player.lane);
    let champion_id = match player.champion_id {
        0 => String::new(),
        id => id.to_string(),
    };
    let champion = group_key_or_other(&player.champion_name, &champion_id);

    let record = MatchRecord::new(
        match_id,
        champion,
        player.win,
        player.kills,
        player.deaths,
        player.assists,
    )
    .with_role(role)
    .with_damage(player.total_damage_dealt_to_champions)
    .with_vision(player.vision_score)
    .with_cs(cs)
    .with_team_kills(team_kills)
    .with_objectives(player.objective_events());

    let details = MatchDetails {
        match_id: match_id.to_string(),
        champion_id: player.champion_id,
        champion_name: player.champion_name.clone(),
        win: player.win,
        kills: player.kills,
        deaths: player.deaths,
        assists: player.assists,
        cs,
        role: player.role.clone(),
        lane: player.lane.clone(),
        timestamp: DateTime::<Utc>::from_timestamp_millis(info.game_creation).unwrap_or_default(),
    };

    Ok((record, details))
}
