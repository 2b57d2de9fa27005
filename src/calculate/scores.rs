//! Composite heuristic scores.
//!
//! All weights below reproduce the production formulas exactly. They are
//! heuristics, not tuned values; change them only together with the
//! consumers of the scores.

use crate::models::ObjectiveEvents;

/// League objective weights.
pub const DRAGON_KILL_WEIGHT: u64 = 3;
pub const BARON_KILL_WEIGHT: u64 = 5;
pub const TURRET_KILL_WEIGHT: u64 = 2;
pub const OBJECTIVE_STEAL_WEIGHT: u64 = 4;
pub const STEAL_ASSIST_WEIGHT: u64 = 2;

/// Valorant objective weights.
pub const SPIKE_PLANT_WEIGHT: u64 = 2;
pub const SPIKE_DEFUSE_WEIGHT: u64 = 3;
pub const FIRST_BLOOD_WEIGHT: u64 = 1;

/// Impact score: `kda * 0.4 + damage / 1000 * 0.3 + objectives * 0.3`.
pub const IMPACT_KDA_WEIGHT: f64 = 0.4;
pub const IMPACT_DAMAGE_WEIGHT: f64 = 0.3;
pub const IMPACT_OBJECTIVE_WEIGHT: f64 = 0.3;

/// Carry score: `kda * 5 + avg_damage / 1000 * 3 + win_rate * 0.2`.
pub const CARRY_KDA_WEIGHT: f64 = 5.0;
pub const CARRY_DAMAGE_WEIGHT: f64 = 3.0;
pub const CARRY_WIN_RATE_WEIGHT: f64 = 0.2;

/// Versatility score: `groups * 5 + roles * 10`.
pub const VERSATILITY_GROUP_WEIGHT: f64 = 5.0;
pub const VERSATILITY_ROLE_WEIGHT: f64 = 10.0;

/// Upper bound for the clamped scores.
pub const SCORE_CAP: f64 = 100.0;

/// Weighted sum of a match's objective events.
///
/// Counters are widened to `u64` first, so any `u32` input fits.
pub fn objective_score(events: &ObjectiveEvents) -> u64 {
    match *events {
        ObjectiveEvents::League {
            dragon_kills,
            baron_kills,
            turret_kills,
            objectives_stolen,
            objectives_stolen_assists,
        } => {
            u64::from(dragon_kills) * DRAGON_KILL_WEIGHT
                + u64::from(baron_kills) * BARON_KILL_WEIGHT
                + u64::from(turret_kills) * TURRET_KILL_WEIGHT
                + u64::from(objectives_stolen) * OBJECTIVE_STEAL_WEIGHT
                + u64::from(objectives_stolen_assists) * STEAL_ASSIST_WEIGHT
        }
        ObjectiveEvents::Valorant {
            plants,
            defuses,
            first_bloods,
        } => {
            u64::from(plants) * SPIKE_PLANT_WEIGHT
                + u64::from(defuses) * SPIKE_DEFUSE_WEIGHT
                + u64::from(first_bloods) * FIRST_BLOOD_WEIGHT
        }
    }
}

/// Per-match impact score. Not clamped.
pub fn impact_score(kda: f64, damage: u32, objective_score: u64) -> f64 {
    kda * IMPACT_KDA_WEIGHT
        + damage as f64 / 1000.0 * IMPACT_DAMAGE_WEIGHT
        + objective_score as f64 * IMPACT_OBJECTIVE_WEIGHT
}

/// How much a player carries games, capped at [`SCORE_CAP`].
pub fn carry_score(kda: f64, average_damage: f64, win_rate: f64) -> f64 {
    let score = kda * CARRY_KDA_WEIGHT
        + average_damage / 1000.0 * CARRY_DAMAGE_WEIGHT
        + win_rate * CARRY_WIN_RATE_WEIGHT;
    score.min(SCORE_CAP)
}

/// Champion/agent and role diversity, capped at [`SCORE_CAP`].
pub fn versatility_score(distinct_groups: usize, distinct_roles: usize) -> f64 {
    let score = distinct_groups as f64 * VERSATILITY_GROUP_WEIGHT
        + distinct_roles as f64 * VERSATILITY_ROLE_WEIGHT;
    score.min(SCORE_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_objective_score() {
        let events = ObjectiveEvents::League {
            dragon_kills: 2,
            baron_kills: 1,
            turret_kills: 3,
            objectives_stolen: 1,
            objectives_stolen_assists: 1,
        };
        // 2*3 + 1*5 + 3*2 + 1*4 + 1*2
        assert_eq!(objective_score(&events), 23);
    }

    #[test]
    fn test_valorant_objective_score() {
        let events = ObjectiveEvents::Valorant {
            plants: 2,
            defuses: 1,
            first_bloods: 4,
        };
        assert_eq!(objective_score(&events), 2 * 2 + 3 + 4);
    }

    #[test]
    fn test_objective_score_extreme_counters() {
        let events = ObjectiveEvents::League {
            dragon_kills: 2_000_000_000,
            baron_kills: u32::MAX,
            turret_kills: 0,
            objectives_stolen: 0,
            objectives_stolen_assists: 0,
        };
        assert_eq!(
            objective_score(&events),
            6_000_000_000 + u64::from(u32::MAX) * 5
        );

        let events = ObjectiveEvents::Valorant {
            plants: u32::MAX,
            defuses: u32::MAX,
            first_bloods: u32::MAX,
        };
        assert_eq!(objective_score(&events), u64::from(u32::MAX) * 6);
    }

    #[test]
    fn test_impact_score() {
        // 7.5*0.4 + 25.0*0.3 + 10*0.3
        let impact = impact_score(7.5, 25_000, 10);
        assert!((impact - 13.5).abs() < 1e-9);
    }

    #[test]
    fn test_carry_score_formula() {
        // 2*5 + 20*3 + 50*0.2
        let carry = carry_score(2.0, 20_000.0, 50.0);
        assert!((carry - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_carry_score_clamped() {
        assert_eq!(carry_score(1e9, 1e12, 100.0), SCORE_CAP);
    }

    #[test]
    fn test_versatility_score() {
        assert_eq!(versatility_score(3, 2), 35.0);
        assert_eq!(versatility_score(0, 0), 0.0);
    }

    #[test]
    fn test_versatility_score_clamped() {
        assert_eq!(versatility_score(30, 10), SCORE_CAP);
        assert_eq!(versatility_score(usize::MAX / 2, usize::MAX / 2), SCORE_CAP);
    }

    #[test]
    fn test_negative_inputs_not_floored() {
        assert!(carry_score(-10.0, 0.0, 0.0) < 0.0);
    }
}
