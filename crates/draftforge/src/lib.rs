//! DraftForge - Iterative constrained roster selection
//!
//! Builds optimal rosters from a candidate pool under salary-cap, position
//! and team constraints, and repeats the solve across iterations to produce
//! a diversified portfolio whose per-player exposure stays inside
//! caller-specified bounds.
//!
//! # Example
//!
//! ```
//! use draftforge::prelude::*;
//!
//! let rules = RuleSet::new("NBA", 2, 100);
//! let pool = vec![
//!     Player::new("A", "BOS", ["G"], 40, 25.0),
//!     Player::new("B", "NYK", ["F"], 50, 30.0),
//!     Player::new("C", "LAL", ["C"], 60, 20.0),
//! ];
//!
//! let roster = draftforge::run(
//!     &rules,
//!     &pool,
//!     &PlayerPoolSettings::new(),
//!     &OptimizerSettings::new(),
//! )
//! .unwrap()
//! .expect("a feasible roster exists");
//!
//! assert_eq!(roster.len(), 2);
//! assert!(roster.total_salary() <= 100);
//! ```

pub mod constraints;
pub mod exposure;
pub mod optimize;
pub mod pool;

pub use constraints::LineupConstraints;
pub use exposure::{
    appearance_counts, check_exposure, deviation_report, exposure_hints, exposure_matrix,
    exposure_table, ExposureHints,
};
pub use optimize::{run, run_multi};
pub use pool::filter_pool;

// Domain and configuration types callers need alongside the entry points.
pub use draftforge_config::{
    ExposureBound, ExposureConfig, OptimizerSettings, PlayerPoolSettings, RuleSetConfig,
};
pub use draftforge_core::{
    DraftForgeError, Player, Position, PositionQuota, Result, Roster, RuleSet,
};
pub use draftforge_solver::{BranchBoundBackend, Optimizer, SolveOutcome, SolverBackend};

pub mod prelude {
    pub use super::{run, run_multi};
    pub use super::{ExposureBound, OptimizerSettings, PlayerPoolSettings};
    pub use super::{Player, Position, Roster, RuleSet};
}
