//! Roster containers.
//!
//! A `Roster` is built fresh for every successful solve and accumulates the
//! players whose decision variables resolved to 1. Positional legality is
//! enforced here on insertion: each added player is charged against the
//! first of its positions that still has quota capacity.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DraftForgeError, Result};
use crate::player::{Player, Position};
use crate::rules::RuleSet;

/// A selected lineup, owned by the caller of a single solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    league: String,
    size: usize,
    quotas: Vec<(Position, u32)>,
    slots: Vec<(Position, Player)>,
}

impl Roster {
    /// Creates an empty roster sized and slotted for the given rule set.
    pub fn for_rules(rules: &RuleSet) -> Self {
        Roster {
            league: rules.league.clone(),
            size: rules.roster_size as usize,
            quotas: rules
                .quotas
                .iter()
                .map(|q| (q.position.clone(), q.max))
                .collect(),
            slots: Vec::with_capacity(rules.roster_size as usize),
        }
    }

    /// Adds a player, charging it against the first of its positions with
    /// remaining quota capacity. Positions without a quota row are
    /// unconstrained.
    ///
    /// # Errors
    ///
    /// Returns [`DraftForgeError::RosterFull`] when the roster already holds
    /// `roster_size` players, and [`DraftForgeError::NoOpenSlot`] when every
    /// quota the player is eligible for is exhausted.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.slots.len() >= self.size {
            return Err(DraftForgeError::RosterFull(self.size));
        }

        let slot = player
            .positions
            .iter()
            .find(|pos| match self.quota_max(pos) {
                Some(max) => self.count_at(pos) < max,
                None => true,
            })
            .cloned();

        match slot {
            Some(position) => {
                self.slots.push((position, player));
                Ok(())
            }
            None => {
                let positions: Vec<&str> =
                    player.positions.iter().map(Position::as_str).collect();
                Err(DraftForgeError::NoOpenSlot {
                    player: player.name.clone(),
                    positions: positions.join("/"),
                })
            }
        }
    }

    fn quota_max(&self, position: &Position) -> Option<u32> {
        self.quotas
            .iter()
            .find(|(p, _)| p == position)
            .map(|(_, max)| *max)
    }

    fn count_at(&self, position: &Position) -> u32 {
        self.slots.iter().filter(|(p, _)| p == position).count() as u32
    }

    /// Iterates the selected players in insertion order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.slots.iter().map(|(_, player)| player)
    }

    /// Returns true if a player with the given name is on the roster.
    pub fn contains(&self, name: &str) -> bool {
        self.players().any(|p| p.name == name)
    }

    /// Number of players currently on the roster.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the roster holds no players.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Total salary committed.
    pub fn total_salary(&self) -> u32 {
        self.players().map(|p| p.salary).sum()
    }

    /// Total projected points.
    pub fn projected(&self) -> f64 {
        self.players().map(|p| p.projected).sum()
    }

    /// Per-position player counts, for diagnostics.
    pub fn position_counts(&self) -> BTreeMap<Position, u32> {
        let mut counts = BTreeMap::new();
        for (position, _) in &self.slots {
            *counts.entry(position.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// League identifier this roster was built for.
    pub fn league(&self) -> &str {
        &self.league
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} roster: {} players, ${} salary, {:.2} projected",
            self.league,
            self.slots.len(),
            self.total_salary(),
            self.projected()
        )?;
        for (position, player) in &self.slots {
            writeln!(
                f,
                "  {:<5} {:<24} {:<4} ${:<7} {:>7.2}",
                position.as_str(),
                player.name,
                player.team,
                player.salary,
                player.projected
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::new("NBA", 3, 100)
            .with_quota("G", 1, 2)
            .with_quota("F", 1, 2)
    }

    #[test]
    fn test_add_within_quota() {
        let mut roster = Roster::for_rules(&rules());
        roster
            .add_player(Player::new("A", "BOS", ["G"], 30, 30.0))
            .unwrap();
        roster
            .add_player(Player::new("B", "BOS", ["F"], 30, 28.0))
            .unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.contains("A"));
        assert_eq!(roster.total_salary(), 60);
    }

    #[test]
    fn test_reject_over_quota() {
        let mut roster = Roster::for_rules(&rules());
        for name in ["A", "B"] {
            roster
                .add_player(Player::new(name, "BOS", ["G"], 30, 30.0))
                .unwrap();
        }
        let err = roster
            .add_player(Player::new("C", "BOS", ["G"], 30, 30.0))
            .unwrap_err();
        assert!(matches!(err, DraftForgeError::NoOpenSlot { .. }));
    }

    #[test]
    fn test_reject_when_full() {
        let mut roster = Roster::for_rules(&RuleSet::new("NBA", 1, 100));
        roster
            .add_player(Player::new("A", "BOS", ["G"], 30, 30.0))
            .unwrap();
        let err = roster
            .add_player(Player::new("B", "BOS", ["G"], 30, 30.0))
            .unwrap_err();
        assert!(matches!(err, DraftForgeError::RosterFull(1)));
    }

    #[test]
    fn test_multi_position_spills_to_open_quota() {
        let mut roster = Roster::for_rules(&rules());
        roster
            .add_player(Player::new("A", "BOS", ["G"], 30, 30.0))
            .unwrap();
        roster
            .add_player(Player::new("B", "BOS", ["G"], 30, 28.0))
            .unwrap();
        // G quota is exhausted, so a G/F player lands in the F slot.
        roster
            .add_player(Player::new("C", "BOS", ["G", "F"], 30, 26.0))
            .unwrap();
        assert_eq!(
            roster.position_counts().get(&Position::new("F")).copied(),
            Some(1)
        );
    }

    #[test]
    fn test_unquoted_position_is_unconstrained() {
        let mut roster = Roster::for_rules(&RuleSet::new("NFL", 2, 100));
        roster
            .add_player(Player::new("A", "KC", ["QB"], 30, 22.0))
            .unwrap();
        roster
            .add_player(Player::new("B", "KC", ["QB"], 30, 20.0))
            .unwrap();
        assert_eq!(roster.len(), 2);
    }
}
