//! The solver backend seam.
//!
//! Backends receive a complete [`LineupModel`] and report either a feasible
//! assignment (one value per variable, in model order) or infeasibility.
//! Infeasibility is a first-class outcome, never an error.

use crate::model::LineupModel;

/// Result of one backend invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// An optimal feasible assignment was found. `values[i]` is the solved
    /// value of variable `i`.
    Feasible(Vec<bool>),
    /// No assignment satisfies all constraints simultaneously.
    Infeasible,
}

impl SolveOutcome {
    /// Unwraps the assignment, if feasible.
    pub fn values(self) -> Option<Vec<bool>> {
        match self {
            SolveOutcome::Feasible(values) => Some(values),
            SolveOutcome::Infeasible => None,
        }
    }

    /// Returns true if a feasible assignment was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self, SolveOutcome::Feasible(_))
    }
}

/// A mixed-integer solver capable of maximizing a [`LineupModel`].
///
/// Implementations must be deterministic for a given model: the iteration
/// loop's reproducibility guarantee depends on it.
pub trait SolverBackend {
    /// Solves the model to optimality or proves infeasibility.
    fn solve(&mut self, model: &LineupModel) -> SolveOutcome;
}
