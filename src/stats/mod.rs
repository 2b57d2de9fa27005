//! Stats pipeline.
//!
//! Resolves the player, pulls the match list, fetches match payloads with
//! bounded concurrency and folds them, in match-list order, into the
//! response bodies served by the API and printed by the CLI.

pub mod cs2;
pub mod league;
pub mod valorant;

pub use cs2::cs2_stats;
pub use league::{league_stats, LeagueLookup};
pub use valorant::valorant_stats;

use futures::stream::{self, StreamExt};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fetch::{FetchError, RiotApi};
use crate::models::{Game, MatchRecord, RiotAccount, RiotId};
use crate::normalize::NormalizeError;

/// Message returned alongside zeroed stats when nothing could be folded.
pub const NO_MATCHES_MESSAGE: &str = "No recent matches found";

/// Errors that fail a whole stats request.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Failed to look up Riot account {riot_id}: {source}")]
    Account {
        riot_id: String,
        #[source]
        source: FetchError,
    },

    #[error("Failed to fetch {game} match list: {source}")]
    MatchList {
        game: Game,
        #[source]
        source: FetchError,
    },

    #[error("Failed to fetch CS2 stats: {0}")]
    Steam(#[source] FetchError),

    #[error("No CS2 stats available: {0}")]
    NoStats(String),
}

/// Resolve a Riot ID to its account.
pub async fn resolve_account(
    riot: &dyn RiotApi,
    riot_id: &RiotId,
) -> Result<RiotAccount, StatsError> {
    riot.account_by_riot_id(riot_id)
        .await
        .map_err(|source| StatsError::Account {
            riot_id: riot_id.to_string(),
            source,
        })
}

/// Fetch the newest `history` match IDs and keep the first `analyzed`.
pub async fn analyzed_match_ids(
    riot: &dyn RiotApi,
    game: Game,
    puuid: &str,
    history: usize,
    analyzed: usize,
) -> Result<Vec<String>, StatsError> {
    let mut ids = riot
        .match_ids(game, puuid, history)
        .await
        .map_err(|source| StatsError::MatchList { game, source })?;

    debug!("{} match list returned {} IDs", game, ids.len());
    ids.truncate(analyzed);
    Ok(ids)
}

/// Fetch match payloads with at most `limit` requests in flight.
///
/// Results come back in the order of `ids` regardless of completion order.
pub async fn fetch_payloads(
    riot: &dyn RiotApi,
    game: Game,
    ids: &[String],
    limit: usize,
) -> Vec<(String, Result<String, FetchError>)> {
    stream::iter(ids.iter().cloned())
        .map(|id| async move {
            let payload = riot.match_detail(game, &id).await;
            (id, payload)
        })
        .buffered(limit.max(1))
        .collect()
        .await
}

/// Fetch and normalize every match, skipping the ones that fail.
///
/// Skips are logged and never surface as errors.
pub async fn collect_matches<D, F>(
    riot: &dyn RiotApi,
    game: Game,
    puuid: &str,
    ids: &[String],
    limit: usize,
    normalize: F,
) -> Vec<(MatchRecord, D)>
where
    F: Fn(&str, &str, &str) -> Result<(MatchRecord, D), NormalizeError>,
{
    let mut matches = Vec::with_capacity(ids.len());

    for (match_id, payload) in fetch_payloads(riot, game, ids, limit).await {
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Skipping {} match {}: {}", game, match_id, e);
                continue;
            }
        };

        match normalize(&match_id, &payload, puuid) {
            Ok(normalized) => matches.push(normalized),
            Err(e) => warn!("Skipping {} match {}: {}", game, match_id, e),
        }
    }

    debug!(
        "{}: {} of {} matches usable",
        game,
        matches.len(),
        ids.len()
    );
    matches
}
