//! Incremental aggregation of match records.
//!
//! One [`Aggregation`] lives for exactly one stats request: it is created
//! empty, every record is folded once in upstream order, and the derived
//! figures are read only after the last fold.

use std::collections::HashMap;

use crate::models::MatchRecord;

use super::{
    calculate_win_rate, impact_score, incremental_mean, kda_ratio, match_kda, objective_score,
    per_game, percentage,
};

/// Running statistics for one champion, agent or role.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupAggregate {
    pub key: String,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,

    /// Incremental mean of per-match KDA
    pub running_kda: f64,

    /// Incremental mean of per-match impact score
    pub running_impact_score: f64,

    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub vision: u64,
    pub objective_score: u64,
}

impl GroupAggregate {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    fn fold(&mut self, record: &MatchRecord, kda: f64, impact: f64, objectives: u64) {
        self.games += 1;
        if record.win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.running_kda = incremental_mean(self.running_kda, self.games, kda);
        self.running_impact_score = incremental_mean(self.running_impact_score, self.games, impact);

        self.kills += record.kills as u64;
        self.deaths += record.deaths as u64;
        self.assists += record.assists as u64;
        self.vision += record.vision_score as u64;
        self.objective_score += objectives;
    }

    pub fn win_rate(&self) -> f64 {
        calculate_win_rate(self.wins, self.games)
    }

    pub fn average_kills(&self) -> f64 {
        per_game(self.kills, self.games)
    }

    pub fn average_deaths(&self) -> f64 {
        per_game(self.deaths, self.games)
    }

    pub fn average_assists(&self) -> f64 {
        per_game(self.assists, self.games)
    }

    pub fn average_vision(&self) -> f64 {
        per_game(self.vision, self.games)
    }

    pub fn average_objective_score(&self) -> f64 {
        per_game(self.objective_score, self.games)
    }
}

/// Group aggregates keyed by group key, kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct GroupTable {
    index: HashMap<String, usize>,
    groups: Vec<GroupAggregate>,
}

impl GroupTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, key: &str) -> &mut GroupAggregate {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(GroupAggregate::new(key));
                let slot = self.groups.len() - 1;
                self.index.insert(key.to_string(), slot);
                slot
            }
        };
        &mut self.groups[slot]
    }

    pub fn get(&self, key: &str) -> Option<&GroupAggregate> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GroupAggregate> {
        self.groups.iter()
    }

    pub fn into_vec(self) -> Vec<GroupAggregate> {
        self.groups
    }
}

/// Plain running sums across every folded record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallAggregate {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_kills: u64,
    pub total_deaths: u64,
    pub total_assists: u64,
    pub total_cs: u64,
    pub total_vision: u64,
    pub total_damage: u64,
    pub total_objective_score: u64,
    pub total_team_kills: u64,
}

/// Figures derived from [`OverallAggregate`] once the pass is complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverallStats {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub kda: f64,
    pub average_kills: f64,
    pub average_deaths: f64,
    pub average_assists: f64,
    pub average_cs: f64,
    pub average_vision: f64,
    pub average_damage: f64,
    pub win_rate: f64,
    pub kill_participation: f64,
    pub objective_control: f64,
}

impl OverallAggregate {
    fn fold(&mut self, record: &MatchRecord, objectives: u64) {
        self.games += 1;
        if record.win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        self.total_kills += record.kills as u64;
        self.total_deaths += record.deaths as u64;
        self.total_assists += record.assists as u64;
        self.total_cs += record.cs as u64;
        self.total_vision += record.vision_score as u64;
        self.total_damage += record.damage as u64;
        self.total_objective_score += objectives;
        self.total_team_kills += record.team_kills as u64;
    }

    /// Derive averages and rates from the sums.
    ///
    /// Returns `None` when nothing was folded, so "no matches" stays
    /// distinguishable from matches that happen to have zero stats.
    pub fn derive(&self) -> Option<OverallStats> {
        if self.games == 0 {
            return None;
        }

        let games = self.games;
        Some(OverallStats {
            total_games: games,
            wins: self.wins,
            losses: self.losses,
            kda: kda_ratio(self.total_kills, self.total_deaths, self.total_assists),
            average_kills: per_game(self.total_kills, games),
            average_deaths: per_game(self.total_deaths, games),
            average_assists: per_game(self.total_assists, games),
            average_cs: per_game(self.total_cs, games),
            average_vision: per_game(self.total_vision, games),
            average_damage: per_game(self.total_damage, games),
            win_rate: calculate_win_rate(self.wins, games),
            // Batch ratio over summed totals, unlike the incremental group KDA.
            kill_participation: percentage(
                self.total_kills + self.total_assists,
                self.total_team_kills,
            ),
            objective_control: per_game(self.total_objective_score, games),
        })
    }
}

/// Overall sums plus per-group and per-role aggregates for one request.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub overall: OverallAggregate,
    pub groups: GroupTable,
    pub roles: GroupTable,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold records in the order given.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MatchRecord>) -> Self {
        let mut aggregation = Self::new();
        for record in records {
            aggregation.fold(record);
        }
        aggregation
    }

    /// Fold one record into every dimension.
    pub fn fold(&mut self, record: &MatchRecord) {
        let kda = match_kda(record.kills, record.deaths, record.assists);
        let objectives = objective_score(&record.objectives);
        let impact = impact_score(kda, record.damage, objectives);

        self.overall.fold(record, objectives);
        self.groups
            .entry(&record.group_key)
            .fold(record, kda, impact, objectives);

        if let Some(role) = &record.role {
            self.roles.entry(role).fold(record, kda, impact, objectives);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObjectiveEvents;

    fn record(id: &str, champ: &str, win: bool, k: u32, d: u32, a: u32) -> MatchRecord {
        MatchRecord::new(id, champ, win, k, d, a)
    }

    #[test]
    fn test_three_match_scenario() {
        let records = vec![
            record("M1", "Ahri", true, 10, 2, 5),
            record("M2", "Ahri", true, 8, 0, 3),
            record("M3", "Ahri", true, 6, 3, 7),
        ];

        let aggregation = Aggregation::from_records(&records);
        let stats = aggregation.overall.derive().unwrap();

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 3);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.win_rate, 100.0);

        let ahri = aggregation.groups.get("Ahri").unwrap();
        let expected = (9.25 * 2.0 + 13.0 / 3.0) / 3.0;
        assert!((ahri.running_kda - expected).abs() < 1e-12);
        assert!((ahri.running_kda - 7.611).abs() < 1e-3);
    }

    #[test]
    fn test_running_kda_intermediate_steps() {
        let mut aggregation = Aggregation::new();

        aggregation.fold(&record("M1", "Lux", true, 10, 2, 5));
        assert_eq!(aggregation.groups.get("Lux").unwrap().running_kda, 7.5);

        aggregation.fold(&record("M2", "Lux", true, 8, 0, 3));
        assert_eq!(aggregation.groups.get("Lux").unwrap().running_kda, 9.25);
    }

    #[test]
    fn test_perfect_kda_contributes_takedowns() {
        let aggregation = Aggregation::from_records(&[record("M1", "Zed", true, 4, 0, 9)]);
        assert_eq!(aggregation.groups.get("Zed").unwrap().running_kda, 13.0);
    }

    #[test]
    fn test_incremental_matches_batch_mean() {
        let samples: Vec<(u32, u32, u32)> = (1..=40)
            .map(|i| ((i * 7) % 23, 1 + (i * 3) % 11, (i * 5) % 17))
            .collect();
        let records: Vec<MatchRecord> = samples
            .iter()
            .enumerate()
            .map(|(i, &(k, d, a))| record(&format!("M{}", i), "Ezreal", i % 2 == 0, k, d, a))
            .collect();

        let aggregation = Aggregation::from_records(&records);
        let running = aggregation.groups.get("Ezreal").unwrap().running_kda;

        let batch: f64 = samples
            .iter()
            .map(|&(k, d, a)| (k + a) as f64 / d as f64)
            .sum::<f64>()
            / samples.len() as f64;

        assert!(((running - batch) / batch).abs() < 1e-9);
    }

    #[test]
    fn test_wins_plus_losses_equals_games() {
        let records = vec![
            record("M1", "Ahri", true, 1, 1, 1),
            record("M2", "Garen", false, 1, 1, 1),
            record("M3", "Ahri", false, 1, 1, 1),
            record("M4", "Garen", true, 1, 1, 1),
            record("M5", "Ahri", true, 1, 1, 1),
        ];

        let aggregation = Aggregation::from_records(&records);
        let stats = aggregation.overall.derive().unwrap();
        assert_eq!(stats.wins + stats.losses, stats.total_games);

        for group in aggregation.groups.iter() {
            assert_eq!(group.wins + group.losses, group.games);
        }
        assert_eq!(aggregation.groups.get("Ahri").unwrap().games, 3);
    }

    #[test]
    fn test_roles_tracked_separately() {
        let records = vec![
            record("M1", "Ahri", true, 5, 1, 5).with_role("MIDDLE"),
            record("M2", "Lux", false, 2, 2, 10).with_role("MIDDLE"),
            record("M3", "Thresh", true, 1, 3, 20).with_role("UTILITY"),
            record("M4", "Ahri", true, 5, 5, 5),
        ];

        let aggregation = Aggregation::from_records(&records);

        assert_eq!(aggregation.roles.len(), 2);
        let mid = aggregation.roles.get("MIDDLE").unwrap();
        assert_eq!(mid.games, 2);
        assert_eq!(mid.wins, 1);
        assert!((mid.running_kda - (10.0 + 6.0) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_pass_has_no_derived_stats() {
        let aggregation = Aggregation::new();
        assert!(aggregation.overall.derive().is_none());
        assert!(aggregation.groups.is_empty());
    }

    #[test]
    fn test_zero_stat_matches_still_populated() {
        let aggregation = Aggregation::from_records(&[record("M1", "Teemo", false, 0, 0, 0)]);
        let stats = aggregation.overall.derive().unwrap();

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.kda, 0.0);
        assert_eq!(stats.kill_participation, 0.0);
    }

    #[test]
    fn test_kill_participation_uses_totals() {
        let records = vec![
            record("M1", "Ahri", true, 10, 2, 5).with_team_kills(30),
            record("M2", "Ahri", false, 2, 6, 4).with_team_kills(10),
        ];

        let stats = Aggregation::from_records(&records).overall.derive().unwrap();
        // (12 + 9) / 40 * 100
        assert!((stats.kill_participation - 52.5).abs() < 1e-9);
    }

    #[test]
    fn test_objective_control_and_impact() {
        let events = ObjectiveEvents::League {
            dragon_kills: 1,
            baron_kills: 1,
            turret_kills: 0,
            objectives_stolen: 0,
            objectives_stolen_assists: 0,
        };
        let records = vec![
            record("M1", "Ahri", true, 10, 2, 5)
                .with_damage(20_000)
                .with_objectives(events),
            record("M2", "Ahri", true, 3, 3, 3),
        ];

        let aggregation = Aggregation::from_records(&records);
        let stats = aggregation.overall.derive().unwrap();
        assert_eq!(stats.objective_control, 4.0);
        assert_eq!(stats.average_damage, 10_000.0);

        // impact(M1) = 7.5*0.4 + 20*0.3 + 8*0.3 = 11.4; impact(M2) = 2*0.4 = 0.8
        let ahri = aggregation.groups.get("Ahri").unwrap();
        assert!((ahri.running_impact_score - (11.4 + 0.8) / 2.0).abs() < 1e-9);
        assert_eq!(ahri.average_objective_score(), 4.0);
    }

    #[test]
    fn test_overall_kda_from_sums() {
        let records = vec![
            record("M1", "Ahri", true, 10, 2, 5),
            record("M2", "Ahri", true, 8, 0, 3),
        ];

        let stats = Aggregation::from_records(&records).overall.derive().unwrap();
        assert_eq!(stats.kda, 26.0 / 2.0);
        assert_eq!(stats.average_kills, 9.0);
    }

    #[test]
    fn test_group_table_keeps_first_seen_order() {
        let records = vec![
            record("M1", "Zed", true, 1, 1, 1),
            record("M2", "Ahri", true, 1, 1, 1),
            record("M3", "Zed", true, 1, 1, 1),
            record("M4", "Lux", true, 1, 1, 1),
        ];

        let keys: Vec<String> = Aggregation::from_records(&records)
            .groups
            .into_vec()
            .into_iter()
            .map(|g| g.key)
            .collect();
        assert_eq!(keys, vec!["Zed", "Ahri", "Lux"]);
    }
}
