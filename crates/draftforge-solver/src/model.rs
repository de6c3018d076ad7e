//! The lineup model: plain data handed to a solver backend.
//!
//! The model knows nothing about players or rules. It is a set of binary
//! variables, linear constraints over them, and a linear objective to
//! maximize. Keeping it data-only lets any backend consume it without
//! touching constraint construction.

/// A linear constraint `lower <= sum(coeff * var) <= upper` over binary
/// variables. Either bound may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Human-readable label for diagnostics ("salary_cap", "quota:G", ...).
    pub label: String,
    /// `(variable index, coefficient)` pairs. Indices refer to the model's
    /// variable order.
    pub terms: Vec<(usize, f64)>,
    /// Inclusive lower bound on the weighted sum.
    pub lower: Option<f64>,
    /// Inclusive upper bound on the weighted sum.
    pub upper: Option<f64>,
}

impl LinearConstraint {
    /// `sum == rhs`
    pub fn equality(label: impl Into<String>, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        LinearConstraint {
            label: label.into(),
            terms,
            lower: Some(rhs),
            upper: Some(rhs),
        }
    }

    /// `sum <= rhs`
    pub fn at_most(label: impl Into<String>, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        LinearConstraint {
            label: label.into(),
            terms,
            lower: None,
            upper: Some(rhs),
        }
    }

    /// `sum >= rhs`
    pub fn at_least(label: impl Into<String>, terms: Vec<(usize, f64)>, rhs: f64) -> Self {
        LinearConstraint {
            label: label.into(),
            terms,
            lower: Some(rhs),
            upper: None,
        }
    }

    /// Pins a single variable to 0 or 1.
    pub fn fix(label: impl Into<String>, var: usize, value: bool) -> Self {
        let rhs = if value { 1.0 } else { 0.0 };
        Self::equality(label, vec![(var, 1.0)], rhs)
    }
}

/// A complete 0/1 maximization model.
///
/// # Example
///
/// ```
/// use draftforge_solver::{LinearConstraint, LineupModel};
///
/// let mut model = LineupModel::new(3);
/// model.set_objective(0, 10.0);
/// model.set_objective(1, 7.0);
/// model.set_objective(2, 4.0);
/// model.push(LinearConstraint::at_most(
///     "pick_two",
///     (0..3).map(|i| (i, 1.0)).collect(),
///     2.0,
/// ));
/// assert_eq!(model.binary_count(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineupModel {
    binary_count: usize,
    /// Objective coefficient per variable, in variable order.
    pub objective: Vec<f64>,
    /// All constraints attached so far.
    pub constraints: Vec<LinearConstraint>,
}

impl LineupModel {
    /// Creates a model with `binary_count` variables and a zero objective.
    pub fn new(binary_count: usize) -> Self {
        LineupModel {
            binary_count,
            objective: vec![0.0; binary_count],
            constraints: Vec::new(),
        }
    }

    /// Number of binary variables.
    pub fn binary_count(&self) -> usize {
        self.binary_count
    }

    /// Sets one variable's objective coefficient.
    pub fn set_objective(&mut self, var: usize, coefficient: f64) {
        self.objective[var] = coefficient;
    }

    /// Attaches a constraint.
    pub fn push(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Labels of every attached constraint, for failure diagnostics.
    pub fn constraint_labels(&self) -> Vec<&str> {
        self.constraints.iter().map(|c| c.label.as_str()).collect()
    }
}
