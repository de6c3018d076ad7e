//! The formulator/adapter between the domain and a solver backend.
//!
//! One binary variable per eligible player, in pool order. Structural
//! constraints come from the rule set; forced-in/forced-out constraints come
//! from the iteration-scoped `banned`/`locked` flags the overlay wrote onto
//! the pool before formulation.

use std::collections::BTreeMap;

use draftforge_core::{Player, RuleSet};

use crate::backend::SolverBackend;
use crate::bnb::BranchBoundBackend;
use crate::model::{LinearConstraint, LineupModel};

/// Builds and solves the 0/1 model for one iteration.
///
/// The caller extracts selected players by filtering `values[i] == true`
/// against the same player slice it passed in; indices line up by contract.
///
/// # Example
///
/// ```
/// use draftforge_core::{Player, RuleSet};
/// use draftforge_solver::Optimizer;
///
/// let rules = RuleSet::new("NBA", 2, 110);
/// let pool = vec![
///     Player::new("A", "BOS", ["G"], 40, 25.0),
///     Player::new("B", "BOS", ["F"], 50, 30.0),
///     Player::new("C", "BOS", ["C"], 70, 40.0),
/// ];
///
/// let values = Optimizer::new(&pool, &rules).solve().unwrap();
/// // B + C busts the cap, so A + C is optimal.
/// assert_eq!(values, vec![true, false, true]);
/// ```
pub struct Optimizer<'a, B = BranchBoundBackend> {
    players: &'a [Player],
    backend: B,
    model: LineupModel,
}

impl<'a> Optimizer<'a, BranchBoundBackend> {
    /// Formulates the model for the given pool and rules with the default
    /// exact backend.
    pub fn new(players: &'a [Player], rules: &RuleSet) -> Self {
        Self::with_backend(players, rules, BranchBoundBackend::new())
    }
}

impl<'a, B: SolverBackend> Optimizer<'a, B> {
    /// Formulates the model for the given pool and rules with a caller
    /// supplied backend.
    pub fn with_backend(players: &'a [Player], rules: &RuleSet, backend: B) -> Self {
        Optimizer {
            players,
            backend,
            model: build_model(players, rules),
        }
    }

    /// The formulated model, for inspection and diagnostics.
    pub fn model(&self) -> &LineupModel {
        &self.model
    }

    /// Runs the backend once.
    ///
    /// Returns `Some(values)` with one solved value per player in pool order,
    /// or `None` when no assignment satisfies all constraints. Infeasibility
    /// is an outcome the iteration loop branches on, not an error.
    pub fn solve(&mut self) -> Option<Vec<bool>> {
        tracing::debug!(
            players = self.players.len(),
            constraints = self.model.constraints.len(),
            "solving lineup model"
        );
        self.backend.solve(&self.model).values()
    }
}

fn build_model(players: &[Player], rules: &RuleSet) -> LineupModel {
    let mut model = LineupModel::new(players.len());

    for (i, player) in players.iter().enumerate() {
        model.set_objective(i, player.value());
    }

    model.push(LinearConstraint::equality(
        "roster_size",
        (0..players.len()).map(|i| (i, 1.0)).collect(),
        f64::from(rules.roster_size),
    ));

    model.push(LinearConstraint::at_most(
        "salary_cap",
        players
            .iter()
            .enumerate()
            .map(|(i, p)| (i, f64::from(p.salary)))
            .collect(),
        f64::from(rules.salary_cap),
    ));

    // A multi-position player counts toward every quota it is eligible for.
    for quota in &rules.quotas {
        let terms: Vec<(usize, f64)> = players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.plays(&quota.position))
            .map(|(i, _)| (i, 1.0))
            .collect();
        model.push(LinearConstraint {
            label: format!("quota:{}", quota.position),
            terms,
            lower: Some(f64::from(quota.min)),
            upper: Some(f64::from(quota.max)),
        });
    }

    if let Some(limit) = rules.max_players_per_team {
        let mut teams: BTreeMap<&str, Vec<(usize, f64)>> = BTreeMap::new();
        for (i, player) in players.iter().enumerate() {
            teams.entry(player.team.as_str()).or_default().push((i, 1.0));
        }
        for (team, terms) in teams {
            model.push(LinearConstraint::at_most(
                format!("team:{team}"),
                terms,
                f64::from(limit),
            ));
        }
    }

    for (i, player) in players.iter().enumerate() {
        if player.locked {
            model.push(LinearConstraint::fix(
                format!("lock:{}", player.name),
                i,
                true,
            ));
        } else if player.banned {
            model.push(LinearConstraint::fix(
                format!("ban:{}", player.name),
                i,
                false,
            ));
        }
    }

    model
}
