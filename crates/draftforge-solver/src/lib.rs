//! DraftForge Solver - 0/1 formulation and solver backends
//!
//! This crate turns a player pool and a rule set into a binary assignment
//! model and solves it:
//! - `LineupModel` is the plain-data variable/constraint/objective model
//! - `SolverBackend` is the narrow seam any MIP backend can implement
//! - `BranchBoundBackend` is the default exact backend
//! - `Optimizer` is the formulator/adapter the iteration loop drives

pub mod backend;
pub mod bnb;
pub mod model;
pub mod optimizer;


pub use backend::{SolveOutcome, SolverBackend};
pub use bnb::BranchBoundBackend;
pub use model::{LinearConstraint, LineupModel};
pub use optimizer::Optimizer;
