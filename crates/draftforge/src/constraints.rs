//! The constraint overlay: per-iteration forced-in/forced-out state.
//!
//! Bans and locks are layered on top of static pool eligibility for the next
//! solve only. The overlay writes the `banned`/`locked` flags onto the pool
//! before formulation and clears every flag at iteration boundaries; nothing
//! here ever removes a player from the pool.

use draftforge_core::{DraftForgeError, Player, Result};

/// Forced-out and forced-in player names for one solve.
///
/// A name must resolve to exactly one player in the active pool; a name that
/// resolves to zero players is a silent no-op (a configuration mismatch, not
/// a fatal error - the ban list may reference a player filtered out
/// upstream), surfaced only on the debug log channel.
///
/// # Example
///
/// ```
/// use draftforge::LineupConstraints;
///
/// let mut overlay = LineupConstraints::new();
/// overlay.ban("L. James").unwrap();
/// overlay.lock("S. Curry").unwrap();
/// // Banning a locked player is a conflict:
/// assert!(overlay.ban("S. Curry").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineupConstraints {
    banned: Vec<String>,
    locked: Vec<String>,
}

impl LineupConstraints {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a named player as forced out of the next solve.
    ///
    /// # Errors
    ///
    /// Returns [`DraftForgeError::ConflictingConstraint`] if the player is
    /// already locked.
    pub fn ban(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.locked.contains(&name) {
            return Err(DraftForgeError::ConflictingConstraint(name));
        }
        if !self.banned.contains(&name) {
            self.banned.push(name);
        }
        Ok(())
    }

    /// Marks a named player as forced into the next solve.
    ///
    /// # Errors
    ///
    /// Returns [`DraftForgeError::ConflictingConstraint`] if the player is
    /// already banned.
    pub fn lock(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.banned.contains(&name) {
            return Err(DraftForgeError::ConflictingConstraint(name));
        }
        if !self.locked.contains(&name) {
            self.locked.push(name);
        }
        Ok(())
    }

    /// Banned names, in insertion order.
    pub fn banned(&self) -> &[String] {
        &self.banned
    }

    /// Locked names, in insertion order.
    pub fn locked(&self) -> &[String] {
        &self.locked
    }

    /// Returns true if no ban or lock is registered.
    pub fn is_empty(&self) -> bool {
        self.banned.is_empty() && self.locked.is_empty()
    }

    /// Writes the overlay onto the pool's iteration-scoped flags.
    pub fn apply(&self, pool: &mut [Player]) {
        for name in &self.banned {
            match pool.iter_mut().find(|p| &p.name == name) {
                Some(player) => player.banned = true,
                None => tracing::debug!(%name, "ban target not in active pool, ignoring"),
            }
        }
        for name in &self.locked {
            match pool.iter_mut().find(|p| &p.name == name) {
                Some(player) => player.locked = true,
                None => tracing::debug!(%name, "lock target not in active pool, ignoring"),
            }
        }
    }

    /// Clears both flags for every player in the pool. Called at the start
    /// of each iteration so bans and locks never silently persist.
    pub fn reset_pool(pool: &mut [Player]) {
        for player in pool {
            player.clear_flags();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Player> {
        vec![
            Player::new("A", "BOS", ["G"], 10, 10.0),
            Player::new("B", "BOS", ["F"], 10, 10.0),
        ]
    }

    #[test]
    fn test_apply_sets_flags() {
        let mut pool = pool();
        let mut overlay = LineupConstraints::new();
        overlay.ban("A").unwrap();
        overlay.lock("B").unwrap();
        overlay.apply(&mut pool);
        assert!(pool[0].banned);
        assert!(pool[1].locked);
    }

    #[test]
    fn test_unknown_name_is_noop() {
        let mut pool = pool();
        let mut overlay = LineupConstraints::new();
        overlay.ban("Z. Nobody").unwrap();
        overlay.apply(&mut pool);
        assert!(pool.iter().all(|p| !p.banned && !p.locked));
    }

    #[test]
    fn test_conflict_rejected_both_ways() {
        let mut overlay = LineupConstraints::new();
        overlay.ban("A").unwrap();
        assert!(matches!(
            overlay.lock("A"),
            Err(DraftForgeError::ConflictingConstraint(_))
        ));

        let mut overlay = LineupConstraints::new();
        overlay.lock("A").unwrap();
        assert!(overlay.ban("A").is_err());
    }

    #[test]
    fn test_reset_pool_clears_flags() {
        let mut pool = pool();
        let mut overlay = LineupConstraints::new();
        overlay.ban("A").unwrap();
        overlay.lock("B").unwrap();
        overlay.apply(&mut pool);
        LineupConstraints::reset_pool(&mut pool);
        assert!(pool.iter().all(|p| !p.banned && !p.locked));
    }

    #[test]
    fn test_duplicate_registration_is_idempotent() {
        let mut overlay = LineupConstraints::new();
        overlay.ban("A").unwrap();
        overlay.ban("A").unwrap();
        assert_eq!(overlay.banned().len(), 1);
    }
}
