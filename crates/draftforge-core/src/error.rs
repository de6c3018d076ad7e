//! Error types for DraftForge

use thiserror::Error;

/// Main error type for DraftForge operations
#[derive(Debug, Error)]
pub enum DraftForgeError {
    /// Error in rule set definition
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),

    /// A player is simultaneously forced out and forced in
    #[error("Conflicting constraint: '{0}' is both banned and locked")]
    ConflictingConstraint(String),

    /// Roster already holds `roster_size` players
    #[error("Roster is full ({0} players)")]
    RosterFull(usize),

    /// No open slot accepts any of the player's positions
    #[error("No open {positions} slot for '{player}'")]
    NoOpenSlot {
        /// Name of the rejected player.
        player: String,
        /// Positions the player is eligible for.
        positions: String,
    },

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for DraftForge operations
pub type Result<T> = std::result::Result<T, DraftForgeError>;
