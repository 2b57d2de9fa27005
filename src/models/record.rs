//! Normalized per-player match record.
//!
//! A `MatchRecord` is what every provider payload is reduced to before
//! aggregation. Records are built once by a normalizer and only read
//! afterwards.

use serde::{Deserialize, Serialize};

/// Objective-related event counts, provider specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum ObjectiveEvents {
    League {
        dragon_kills: u32,
        baron_kills: u32,
        turret_kills: u32,
        objectives_stolen: u32,
        objectives_stolen_assists: u32,
    },
    Valorant {
        plants: u32,
        defuses: u32,
        first_bloods: u32,
    },
}

impl ObjectiveEvents {
    pub fn league_empty() -> Self {
        ObjectiveEvents::League {
            dragon_kills: 0,
            baron_kills: 0,
            turret_kills: 0,
            objectives_stolen: 0,
            objectives_stolen_assists: 0,
        }
    }
}

/// One player's line from one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Upstream match identifier
    pub match_id: String,

    pub win: bool,

    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,

    /// Champion / agent bucket
    pub group_key: String,

    /// Role bucket, when the provider has one
    pub role: Option<String>,

    pub vision_score: u32,

    /// Damage dealt to opposing players
    pub damage: u32,

    /// Creep score (minions + monsters where reported)
    pub cs: u32,

    /// Kills by everyone on the subject's team, subject included
    pub team_kills: u32,

    pub objectives: ObjectiveEvents,
}

impl MatchRecord {
    /// A record with only the core fields set; counters default to zero.
    pub fn new(
        match_id: impl Into<String>,
        group_key: impl Into<String>,
        win: bool,
        kills: u32,
        deaths: u32,
        assists: u32,
    ) -> Self {
        Self {
            match_id: match_id.into(),
            win,
            kills,
            deaths,
            assists,
            group_key: group_key.into(),
            role: None,
            vision_score: 0,
            damage: 0,
            cs: 0,
            team_kills: 0,
            objectives: ObjectiveEvents::league_empty(),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }

    pub fn with_vision(mut self, vision_score: u32) -> Self {
        self.vision_score = vision_score;
        self
    }

    pub fn with_cs(mut self, cs: u32) -> Self {
        self.cs = cs;
        self
    }

    pub fn with_team_kills(mut self, team_kills: u32) -> Self {
        self.team_kills = team_kills;
        self
    }

    pub fn with_objectives(mut self, objectives: ObjectiveEvents) -> Self {
        self.objectives = objectives;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_counters() {
        let record = MatchRecord::new("NA1_1", "Ahri", true, 5, 2, 7);

        assert_eq!(record.group_key, "Ahri");
        assert!(record.role.is_none());
        assert_eq!(record.damage, 0);
        assert_eq!(record.team_kills, 0);
        assert_eq!(record.objectives, ObjectiveEvents::league_empty());
    }

    #[test]
    fn test_builders() {
        let record = MatchRecord::new("NA1_2", "Jinx", false, 3, 4, 1)
            .with_role("CARRY")
            .with_damage(21000)
            .with_team_kills(18)
            .with_objectives(ObjectiveEvents::Valorant {
                plants: 1,
                defuses: 0,
                first_bloods: 2,
            });

        assert_eq!(record.role.as_deref(), Some("CARRY"));
        assert_eq!(record.damage, 21000);
        assert_eq!(record.team_kills, 18);
        assert!(matches!(
            record.objectives,
            ObjectiveEvents::Valorant { first_bloods: 2, .. }
        ));
    }

    #[test]
    fn test_objective_events_tagged_json() {
        let json = serde_json::to_value(ObjectiveEvents::Valorant {
            plants: 1,
            defuses: 2,
            first_bloods: 3,
        })
        .unwrap();

        assert_eq!(json["provider"], "valorant");
        assert_eq!(json["defuses"], 2);
    }
}
