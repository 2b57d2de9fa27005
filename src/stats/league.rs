//! League of Legends statistics.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, warn};

use super::{analyzed_match_ids, collect_matches, resolve_account, StatsError, NO_MATCHES_MESSAGE};
use crate::calculate::{carry_score, top_groups, versatility_score, Aggregation};
use crate::config::RiotConfig;
use crate::fetch::RiotApi;
use crate::models::{
    ChampionStats, Game, LeagueStatsResponse, MatchDetails, MatchRecord, MatchStats,
    QuickPlayStats, RiotId, RoleStats,
};
use crate::normalize::league;

/// How the summoner was identified by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeagueLookup {
    Puuid(String),
    RiotId(RiotId),
}

/// Build the League stats response for one player.
pub async fn league_stats(
    riot: &dyn RiotApi,
    config: &RiotConfig,
    lookup: LeagueLookup,
) -> Result<LeagueStatsResponse, StatsError> {
    let puuid = match lookup {
        LeagueLookup::Puuid(puuid) => puuid,
        LeagueLookup::RiotId(riot_id) => resolve_account(riot, &riot_id).await?.puuid,
    };

    let summoner = match riot.summoner_by_puuid(&puuid).await {
        Ok(summoner) => Some(summoner),
        Err(e) if e.is_not_found() => {
            debug!("No summoner profile for {}", puuid);
            None
        }
        Err(e) => {
            warn!("Summoner lookup failed: {}", e);
            None
        }
    };

    let ranked = riot.ranked_entries(&puuid).await.unwrap_or_else(|e| {
        warn!("Ranked lookup failed: {}", e);
        Vec::new()
    });

    let window = &config.league;
    let ids = analyzed_match_ids(
        riot,
        Game::League,
        &puuid,
        window.match_history_count,
        window.matches_analyzed,
    )
    .await?;

    let matches = collect_matches(
        riot,
        Game::League,
        &puuid,
        &ids,
        config.max_concurrent_requests,
        league::normalize,
    )
    .await;

    let stats = build_match_stats(&matches, window.recent_matches);
    let has_matches = stats.total_games > 0;
    if has_matches {
        info!(
            "League stats: {} games, {:.1}% win rate",
            stats.total_games, stats.win_rate
        );
    } else {
        info!("League stats: no usable matches");
    }

    Ok(LeagueStatsResponse {
        summoner,
        ranked,
        has_matches,
        message: (!has_matches).then(|| NO_MATCHES_MESSAGE.to_string()),
        matches: stats,
    })
}

/// Fold normalized matches, in order, into League match stats.
///
/// Returns zeroed stats with `total_games == 0` when `matches` is empty.
pub fn build_match_stats(matches: &[(MatchRecord, MatchDetails)], recent_limit: usize) -> MatchStats {
    let aggregation = Aggregation::from_records(matches.iter().map(|(record, _)| record));
    let Some(overall) = aggregation.overall.derive() else {
        return MatchStats::default();
    };

    let mut champion_ids: HashMap<&str, i64> = HashMap::new();
    for (record, details) in matches {
        champion_ids
            .entry(record.group_key.as_str())
            .or_insert(details.champion_id);
    }

    let role_pref_stats: BTreeMap<String, RoleStats> = aggregation
        .roles
        .iter()
        .map(|role| {
            (
                role.key.clone(),
                RoleStats {
                    games: role.games,
                    wins: role.wins,
                    win_rate: role.win_rate(),
                    kda: role.running_kda,
                    avg_impact_score: role.running_impact_score,
                },
            )
        })
        .collect();

    let versatility = versatility_score(aggregation.groups.len(), aggregation.roles.len());

    let top_champions = top_groups(aggregation.groups)
        .into_iter()
        .map(|champ| ChampionStats {
            champion_id: champion_ids.get(champ.key.as_str()).copied().unwrap_or_default(),
            games: champ.games,
            wins: champ.wins,
            losses: champ.losses,
            kda: champ.running_kda,
            average_vision_score: champ.average_vision(),
            objective_participation: champ.average_objective_score(),
            avg_impact_score: champ.running_impact_score,
            champion_name: champ.key,
        })
        .collect();

    let recent_matches = matches
        .iter()
        .take(recent_limit)
        .map(|(_, details)| details.clone())
        .collect();

    MatchStats {
        total_games: overall.total_games,
        wins: overall.wins,
        losses: overall.losses,
        kda: overall.kda,
        average_kills: overall.average_kills,
        average_deaths: overall.average_deaths,
        average_assists: overall.average_assists,
        average_cs: overall.average_cs,
        average_vision: overall.average_vision,
        average_damage: overall.average_damage,
        win_rate: overall.win_rate,
        kill_participation: overall.kill_participation,
        objective_control: overall.objective_control,
        top_champions,
        recent_matches,
        quick_play_stats: QuickPlayStats {
            games: overall.total_games,
            wins: overall.wins,
            win_rate: overall.win_rate,
            role_pref_stats,
            carry_score: carry_score(overall.kda, overall.average_damage, overall.win_rate),
            versatility_score: versatility,
        },
    }
}
