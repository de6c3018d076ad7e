//! Default exact backend: depth-first branch-and-bound over binary variables.
//!
//! The search assigns variables in descending objective order, include-branch
//! first, pruning with two tests at every node: a constraint test (an upper
//! bound already exceeded, or a lower bound no longer reachable with the
//! remaining unassigned coefficients) and an incumbent test (the optimistic
//! completion of the current partial assignment cannot beat the best known
//! solution). Coefficients are assumed non-negative, which holds for every
//! constraint the formulator emits.
//!
//! The search is deterministic: identical models produce identical
//! assignments, a property the iteration loop's seeded-reproducibility
//! guarantee relies on.

use crate::backend::{SolveOutcome, SolverBackend};
use crate::model::LineupModel;

const EPS: f64 = 1e-6;

/// Exact 0/1 branch-and-bound solver.
///
/// Stateless between solves; reusable across iterations.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchBoundBackend;

impl BranchBoundBackend {
    /// Creates a new backend.
    pub fn new() -> Self {
        BranchBoundBackend
    }
}

impl SolverBackend for BranchBoundBackend {
    fn solve(&mut self, model: &LineupModel) -> SolveOutcome {
        let mut search = Search::new(model);
        search.dfs(0, 0.0);

        tracing::debug!(
            nodes = search.stats.nodes,
            constraint_prunes = search.stats.constraint_prunes,
            bound_prunes = search.stats.bound_prunes,
            feasible = search.best.is_some(),
            "branch-and-bound finished"
        );

        match search.best {
            Some((_, assignment)) => SolveOutcome::Feasible(assignment),
            None => SolveOutcome::Infeasible,
        }
    }
}

#[derive(Debug, Default)]
struct SearchStats {
    nodes: u64,
    constraint_prunes: u64,
    bound_prunes: u64,
}

struct Search<'a> {
    model: &'a LineupModel,
    /// Variable indices in branching order (objective descending, index
    /// ascending on ties).
    order: Vec<usize>,
    /// Dense coefficient per constraint and variable.
    coeff: Vec<Vec<f64>>,
    /// `suffix[c][d]`: max additional activity constraint `c` can gain from
    /// the variables at branching depth `d` and beyond.
    suffix: Vec<Vec<f64>>,
    /// `obj_suffix[d]`: optimistic objective gain from depth `d` onward.
    obj_suffix: Vec<f64>,
    activity: Vec<f64>,
    assignment: Vec<bool>,
    best: Option<(f64, Vec<bool>)>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(model: &'a LineupModel) -> Self {
        let n = model.binary_count();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            model.objective[b]
                .partial_cmp(&model.objective[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut coeff = vec![vec![0.0; n]; model.constraints.len()];
        for (c, constraint) in model.constraints.iter().enumerate() {
            for &(var, weight) in &constraint.terms {
                coeff[c][var] += weight;
            }
        }

        let mut suffix = vec![vec![0.0; n + 1]; model.constraints.len()];
        for (c, row) in coeff.iter().enumerate() {
            for d in (0..n).rev() {
                suffix[c][d] = suffix[c][d + 1] + row[order[d]];
            }
        }

        let mut obj_suffix = vec![0.0; n + 1];
        for d in (0..n).rev() {
            obj_suffix[d] = obj_suffix[d + 1] + model.objective[order[d]].max(0.0);
        }

        Search {
            model,
            order,
            coeff,
            suffix,
            obj_suffix,
            activity: vec![0.0; model.constraints.len()],
            assignment: vec![false; n],
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn dfs(&mut self, depth: usize, value: f64) {
        self.stats.nodes += 1;

        for (c, constraint) in self.model.constraints.iter().enumerate() {
            if let Some(upper) = constraint.upper {
                if self.activity[c] > upper + EPS {
                    self.stats.constraint_prunes += 1;
                    return;
                }
            }
            if let Some(lower) = constraint.lower {
                if self.activity[c] + self.suffix[c][depth] < lower - EPS {
                    self.stats.constraint_prunes += 1;
                    return;
                }
            }
        }

        if depth == self.order.len() {
            // All bounds verified above; the assignment is feasible.
            let improved = match &self.best {
                None => true,
                Some((best_value, _)) => value > *best_value + EPS,
            };
            if improved {
                self.best = Some((value, self.assignment.clone()));
            }
            return;
        }

        if let Some((best_value, _)) = &self.best {
            if value + self.obj_suffix[depth] <= *best_value + EPS {
                self.stats.bound_prunes += 1;
                return;
            }
        }

        let var = self.order[depth];

        self.assignment[var] = true;
        for c in 0..self.activity.len() {
            self.activity[c] += self.coeff[c][var];
        }
        self.dfs(depth + 1, value + self.model.objective[var]);
        for c in 0..self.activity.len() {
            self.activity[c] -= self.coeff[c][var];
        }
        self.assignment[var] = false;

        self.dfs(depth + 1, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinearConstraint;

    fn selection_model(values: &[f64], costs: &[f64], pick: f64, budget: f64) -> LineupModel {
        let mut model = LineupModel::new(values.len());
        for (i, &v) in values.iter().enumerate() {
            model.set_objective(i, v);
        }
        model.push(LinearConstraint::equality(
            "pick",
            (0..values.len()).map(|i| (i, 1.0)).collect(),
            pick,
        ));
        model.push(LinearConstraint::at_most(
            "budget",
            costs.iter().copied().enumerate().collect(),
            budget,
        ));
        model
    }

    #[test]
    fn test_unconstrained_budget_takes_best() {
        let model = selection_model(&[5.0, 9.0, 1.0, 7.0], &[1.0, 1.0, 1.0, 1.0], 2.0, 10.0);
        let values = BranchBoundBackend::new().solve(&model).values().unwrap();
        assert_eq!(values, vec![false, true, false, true]);
    }

    #[test]
    fn test_budget_forces_substitution() {
        // Taking both 9 and 7 busts the budget; 9 + 5 is the best affordable pair.
        let model = selection_model(&[5.0, 9.0, 1.0, 7.0], &[1.0, 6.0, 1.0, 6.0], 2.0, 8.0);
        let values = BranchBoundBackend::new().solve(&model).values().unwrap();
        assert_eq!(values, vec![true, true, false, false]);
    }

    #[test]
    fn test_infeasible_pick_count() {
        let model = selection_model(&[5.0, 9.0], &[1.0, 1.0], 3.0, 10.0);
        assert_eq!(
            BranchBoundBackend::new().solve(&model),
            SolveOutcome::Infeasible
        );
    }

    #[test]
    fn test_infeasible_budget() {
        let model = selection_model(&[5.0, 9.0, 7.0], &[5.0, 5.0, 5.0], 2.0, 9.0);
        assert_eq!(
            BranchBoundBackend::new().solve(&model),
            SolveOutcome::Infeasible
        );
    }

    #[test]
    fn test_fixed_variables_respected() {
        let mut model = selection_model(&[5.0, 9.0, 1.0, 7.0], &[1.0, 1.0, 1.0, 1.0], 2.0, 10.0);
        model.push(LinearConstraint::fix("ban:1", 1, false));
        model.push(LinearConstraint::fix("lock:2", 2, true));
        let values = BranchBoundBackend::new().solve(&model).values().unwrap();
        assert_eq!(values, vec![false, false, true, true]);
    }

    #[test]
    fn test_empty_model_is_feasible() {
        let model = LineupModel::new(0);
        assert!(BranchBoundBackend::new().solve(&model).is_feasible());
    }

    #[test]
    fn test_lower_bound_unreachable_is_infeasible() {
        let mut model = LineupModel::new(2);
        model.push(LinearConstraint::at_least("quota", vec![(0, 1.0), (1, 1.0)], 3.0));
        assert_eq!(
            BranchBoundBackend::new().solve(&model),
            SolveOutcome::Infeasible
        );
    }
}
