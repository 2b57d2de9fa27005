//! Provider payload normalization.
//!
//! Turns a raw match payload into one [`MatchRecord`](crate::models::MatchRecord)
//! for the requested player, plus the provider-specific summary echoed back
//! in `recentMatches`. A payload that cannot be reduced yields a
//! [`NormalizeError`] and the match is skipped by the caller.

pub mod league;
pub mod valorant;

use thiserror::Error;

/// Group key used when a provider leaves both candidates blank.
pub const OTHER_GROUP: &str = "OTHER";

/// Reasons a single match payload is skipped.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("player not found in match")]
    PlayerNotFound,

    #[error("player's team not found in match")]
    TeamNotFound,
}

/// First usable value of `primary`, `secondary`, else [`OTHER_GROUP`].
///
/// Blank strings and `"NONE"` are treated as missing.
pub fn group_key_or_other(primary: &str, secondary: &str) -> String {
    [primary, secondary]
        .into_iter()
        .map(str::trim)
        .find(|v| !v.is_empty() && *v != "NONE")
        .unwrap_or(OTHER_GROUP)
        .to_string()
}
