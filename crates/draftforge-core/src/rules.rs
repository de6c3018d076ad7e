//! Rule sets: the immutable per-run contest definition.

use crate::error::{DraftForgeError, Result};
use crate::player::Position;

/// Bounds on how many selected players may count toward one position.
///
/// A multi-position player counts toward every position it plays, which is
/// how flex-style slates are expressed (a "G" quota covers both PG and SG
/// eligibility when the pool is tagged accordingly).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionQuota {
    /// Position this quota applies to.
    pub position: Position,
    /// Minimum selected players eligible for this position.
    pub min: u32,
    /// Maximum selected players eligible for this position.
    pub max: u32,
}

impl PositionQuota {
    /// Creates a new quota row.
    pub fn new(position: impl Into<Position>, min: u32, max: u32) -> Self {
        PositionQuota {
            position: position.into(),
            min,
            max,
        }
    }
}

/// The league/contest rules a run solves under. Read-only to the optimizer.
///
/// # Example
///
/// ```
/// use draftforge_core::RuleSet;
///
/// let rules = RuleSet::new("NBA", 5, 100)
///     .with_quota("G", 2, 3)
///     .with_quota("F", 2, 3)
///     .with_team_limit(3);
///
/// assert!(rules.validate().is_ok());
/// assert_eq!(rules.roster_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    /// League identifier ("NBA", "NFL", ...), used for diagnostics only.
    pub league: String,
    /// Exact number of players per roster.
    pub roster_size: u32,
    /// Total salary upper bound.
    pub salary_cap: u32,
    /// Per-position count bounds.
    pub quotas: Vec<PositionQuota>,
    /// Optional upper bound on players drawn from a single team.
    pub max_players_per_team: Option<u32>,
}

impl RuleSet {
    /// Creates a rule set with no quotas or team limit.
    pub fn new(league: impl Into<String>, roster_size: u32, salary_cap: u32) -> Self {
        RuleSet {
            league: league.into(),
            roster_size,
            salary_cap,
            quotas: Vec::new(),
            max_players_per_team: None,
        }
    }

    /// Adds a position quota row.
    pub fn with_quota(mut self, position: impl Into<Position>, min: u32, max: u32) -> Self {
        self.quotas.push(PositionQuota::new(position, min, max));
        self
    }

    /// Caps the number of players selected from any single team.
    pub fn with_team_limit(mut self, limit: u32) -> Self {
        self.max_players_per_team = Some(limit);
        self
    }

    /// Cheap structural sanity checks.
    ///
    /// This does not prove the rule set feasible against any particular pool;
    /// infeasibility against a pool is a first-class solve outcome, not a
    /// configuration error.
    ///
    /// # Errors
    ///
    /// Returns [`DraftForgeError::InvalidRuleSet`] when the roster size is
    /// zero, a quota row has `min > max`, or the quota minimums alone exceed
    /// the roster size.
    pub fn validate(&self) -> Result<()> {
        if self.roster_size == 0 {
            return Err(DraftForgeError::InvalidRuleSet(
                "roster size must be at least 1".into(),
            ));
        }
        for quota in &self.quotas {
            if quota.min > quota.max {
                return Err(DraftForgeError::InvalidRuleSet(format!(
                    "quota for {} has min {} > max {}",
                    quota.position, quota.min, quota.max
                )));
            }
        }
        let min_total: u32 = self.quotas.iter().map(|q| q.min).sum();
        if min_total > self.roster_size {
            return Err(DraftForgeError::InvalidRuleSet(format!(
                "quota minimums sum to {} but roster size is {}",
                min_total, self.roster_size
            )));
        }
        Ok(())
    }

    /// Looks up the quota row for a position, if any.
    pub fn quota(&self, position: &Position) -> Option<&PositionQuota> {
        self.quotas.iter().find(|q| &q.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ok() {
        let rules = RuleSet::new("NBA", 5, 100).with_quota("G", 2, 3).with_quota("F", 2, 3);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_roster() {
        let rules = RuleSet::new("NBA", 0, 100);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_quota() {
        let rules = RuleSet::new("NBA", 5, 100).with_quota("G", 3, 2);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_validate_minimums_exceed_roster() {
        let rules = RuleSet::new("NBA", 3, 100).with_quota("G", 2, 3).with_quota("F", 2, 3);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_quota_lookup() {
        let rules = RuleSet::new("NBA", 5, 100).with_quota("G", 2, 3);
        assert_eq!(rules.quota(&Position::new("G")).map(|q| q.max), Some(3));
        assert!(rules.quota(&Position::new("C")).is_none());
    }
}
