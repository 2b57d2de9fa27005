//! Statistics calculation engine.
//!
//! Reduces normalized match records into per-player statistics:
//! - Per-match KDA and running (incremental) means
//! - Overall sums with averages derived once at the end of a pass
//! - Per-champion / per-agent / per-role group aggregates
//! - Top-N selection and composite heuristic scores

pub mod aggregate;
pub mod ranking;
pub mod scores;

pub use aggregate::*;
pub use ranking::*;
pub use scores::*;

/// KDA for a single match.
///
/// With zero deaths the ratio is `kills + assists` ("perfect" KDA).
pub fn match_kda(kills: u32, deaths: u32, assists: u32) -> f64 {
    kda_ratio(kills as u64, deaths as u64, assists as u64)
}

/// KDA over summed totals, same zero-death policy as [`match_kda`].
pub fn kda_ratio(kills: u64, deaths: u64, assists: u64) -> f64 {
    let takedowns = (kills + assists) as f64;
    if deaths > 0 {
        takedowns / deaths as f64
    } else {
        takedowns
    }
}

/// Fold the `count`-th sample into a running mean over `count - 1` samples.
///
/// `m' = (m * (count - 1) + sample) / count`. Results depend on fold order
/// in floating point, so callers must fold in a fixed order.
pub fn incremental_mean(mean: f64, count: u32, sample: f64) -> f64 {
    if count == 0 {
        return mean;
    }
    (mean * (count - 1) as f64 + sample) / count as f64
}

/// Win rate as a percentage (0-100).
pub fn calculate_win_rate(wins: u32, games: u32) -> f64 {
    percentage(wins as u64, games as u64)
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Per-game average of a summed counter.
pub fn per_game(total: u64, games: u32) -> f64 {
    if games == 0 {
        0.0
    } else {
        total as f64 / games as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_kda_with_deaths() {
        assert_eq!(match_kda(10, 2, 5), 7.5);
        assert!((match_kda(6, 3, 7) - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_match_kda_perfect() {
        assert_eq!(match_kda(8, 0, 3), 11.0);
        assert_eq!(match_kda(0, 0, 0), 0.0);
    }

    #[test]
    fn test_incremental_mean_steps() {
        let m1 = incremental_mean(0.0, 1, 7.5);
        assert_eq!(m1, 7.5);

        let m2 = incremental_mean(m1, 2, 11.0);
        assert_eq!(m2, 9.25);

        let m3 = incremental_mean(m2, 3, 13.0 / 3.0);
        assert!((m3 - (9.25 * 2.0 + 13.0 / 3.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_incremental_mean_zero_count() {
        assert_eq!(incremental_mean(4.2, 0, 100.0), 4.2);
    }

    #[test]
    fn test_calculate_win_rate() {
        assert_eq!(calculate_win_rate(3, 3), 100.0);
        assert_eq!(calculate_win_rate(0, 0), 0.0);
        assert_eq!(calculate_win_rate(1, 4), 25.0);
    }

    #[test]
    fn test_per_game() {
        assert_eq!(per_game(30, 3), 10.0);
        assert_eq!(per_game(30, 0), 0.0);
    }
}
