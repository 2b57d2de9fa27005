//! Valorant statistics.

use std::collections::HashMap;

use tracing::info;

use super::{analyzed_match_ids, collect_matches, resolve_account, StatsError, NO_MATCHES_MESSAGE};
use crate::calculate::{calculate_win_rate, per_game, percentage, top_groups, top_n_by_key, Aggregation};
use crate::config::RiotConfig;
use crate::fetch::RiotApi;
use crate::models::{
    AgentStats, Game, MapStats, MatchRecord, RiotId, ValMatchDetails, ValorantMatchStats,
    ValorantStatsResponse,
};
use crate::normalize::valorant;

/// Build the Valorant stats response for one player.
pub async fn valorant_stats(
    riot: &dyn RiotApi,
    config: &RiotConfig,
    riot_id: &RiotId,
) -> Result<ValorantStatsResponse, StatsError> {
    let account = resolve_account(riot, riot_id).await?;

    let window = &config.valorant;
    let ids = analyzed_match_ids(
        riot,
        Game::Valorant,
        &account.puuid,
        window.match_history_count,
        window.matches_analyzed,
    )
    .await?;

    let matches = collect_matches(
        riot,
        Game::Valorant,
        &account.puuid,
        &ids,
        config.max_concurrent_requests,
        valorant::normalize,
    )
    .await;

    let stats = build_match_stats(&matches, window.recent_matches);
    let has_matches = stats.total_games > 0;
    info!(
        "Valorant stats for {}: {} games",
        riot_id, stats.total_games
    );

    Ok(ValorantStatsResponse {
        account,
        has_matches,
        message: (!has_matches).then(|| NO_MATCHES_MESSAGE.to_string()),
        matches: stats,
    })
}

/// Per-map tally, kept in first-seen order.
fn map_stats(matches: &[(MatchRecord, ValMatchDetails)]) -> Vec<MapStats> {
    let mut maps: Vec<MapStats> = Vec::new();

    for (_, details) in matches {
        let slot = match maps.iter().position(|m| m.name == details.map_id) {
            Some(slot) => slot,
            None => {
                maps.push(MapStats {
                    name: details.map_id.clone(),
                    ..Default::default()
                });
                maps.len() - 1
            }
        };

        let map = &mut maps[slot];
        map.games += 1;
        if details.won {
            map.wins += 1;
        }
        map.rounds += u64::from(details.rounds_total);
        map.rounds_won += u64::from(details.rounds_won);
        map.total_kills += u64::from(details.kills);
    }

    for map in &mut maps {
        map.win_rate = calculate_win_rate(map.wins, map.games);
    }

    top_n_by_key(maps, None, |m| m.games)
}

/// Fold normalized matches, in order, into Valorant match stats.
pub fn build_match_stats(
    matches: &[(MatchRecord, ValMatchDetails)],
    recent_limit: usize,
) -> ValorantMatchStats {
    let aggregation = Aggregation::from_records(matches.iter().map(|(record, _)| record));
    let Some(overall) = aggregation.overall.derive() else {
        return ValorantMatchStats::default();
    };

    let details: Vec<&ValMatchDetails> = matches.iter().map(|(_, d)| d).collect();
    let sum = |field: fn(&ValMatchDetails) -> u32| -> u64 {
        details.iter().map(|d| u64::from(field(d))).sum()
    };

    let kills = sum(|d| d.kills);
    let deaths = sum(|d| d.deaths);
    let assists = sum(|d| d.assists);
    let headshots = sum(|d| d.headshots);
    let total_combat_score = sum(|d| d.combat_score);
    let first_bloods = sum(|d| d.first_bloods);
    let plants = sum(|d| d.plants);
    let defuses = sum(|d| d.defuses);
    let rounds = sum(|d| d.rounds_total);

    let mut agent_ids: HashMap<&str, &str> = HashMap::new();
    for (record, details) in matches {
        agent_ids
            .entry(record.group_key.as_str())
            .or_insert(details.agent_id.as_str());
    }

    let top_agents = top_groups(aggregation.groups)
        .into_iter()
        .map(|agent| AgentStats {
            agent_id: agent_ids.get(agent.key.as_str()).unwrap_or(&"").to_string(),
            matches: agent.games,
            wins: agent.wins,
            losses: agent.losses,
            win_rate: agent.win_rate(),
            kda: agent.running_kda,
            average_kills: agent.average_kills(),
            average_deaths: agent.average_deaths(),
            average_assists: agent.average_assists(),
            avg_impact_score: agent.running_impact_score,
            agent_name: agent.key,
        })
        .collect();

    let mut recent_matches: Vec<ValMatchDetails> = details.iter().map(|d| (*d).clone()).collect();
    recent_matches.sort_by(|a, b| {
        b.game_start_time
            .cmp(&a.game_start_time)
            .then_with(|| b.match_id.cmp(&a.match_id))
    });
    recent_matches.truncate(recent_limit);

    let games = overall.total_games;
    ValorantMatchStats {
        total_games: games,
        wins: overall.wins,
        losses: overall.losses,
        kills,
        deaths,
        assists,
        headshots,
        total_combat_score,
        first_bloods,
        plants,
        defuses,
        kda: overall.kda,
        average_kills: overall.average_kills,
        average_deaths: overall.average_deaths,
        average_assists: overall.average_assists,
        average_combat_score: per_game(total_combat_score, games),
        average_headshots: per_game(headshots, games),
        headshot_percentage: percentage(headshots, kills),
        first_blood_percentage: percentage(first_bloods, rounds),
        plant_percentage: percentage(plants, rounds),
        defuse_percentage: percentage(defuses, rounds),
        win_rate: overall.win_rate,
        kill_participation: overall.kill_participation,
        objective_control: overall.objective_control,
        top_agents,
        map_stats: map_stats(matches),
        recent_matches,
    }
}
