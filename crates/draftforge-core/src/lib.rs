//! DraftForge Core - Domain types for constrained roster selection
//!
//! This crate provides the fundamental types shared by the optimizer:
//! - `Player` records with iteration-scoped ban/lock flags
//! - `RuleSet` describing roster size, salary cap and position quotas
//! - `Roster` containers that enforce positional legality on insertion

pub mod error;
pub mod player;
pub mod roster;
pub mod rules;

pub use error::{DraftForgeError, Result};
pub use player::{Player, Position};
pub use roster::Roster;
pub use rules::{PositionQuota, RuleSet};
