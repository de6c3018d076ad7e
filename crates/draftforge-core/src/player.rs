//! Player and position types.
//!
//! A `Player` carries static identity (name, team, positions, salary,
//! projection) plus two iteration-scoped flags, `banned` and `locked`, that
//! are owned by the constraint overlay and cleared at every iteration
//! boundary. The flags are transient solve state, not identity.

use std::fmt;

use smallvec::SmallVec;

/// A roster position, open-ended because leagues differ ("PG", "FLEX", "CPT").
///
/// # Example
///
/// ```
/// use draftforge_core::Position;
///
/// let pg = Position::new("PG");
/// assert_eq!(pg.as_str(), "PG");
/// assert_eq!(pg.to_string(), "PG");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(String);

impl Position {
    /// Creates a new position.
    pub fn new(name: impl Into<String>) -> Self {
        Position(name.into())
    }

    /// Returns the position name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        Position::new(s)
    }
}

impl From<String> for Position {
    fn from(s: String) -> Self {
        Position(s)
    }
}

/// A candidate player in the pool.
///
/// Names are assumed unique within a pool; the overlay resolves ban/lock
/// requests by name. Most players carry one or two positions, so the
/// position list is inlined.
///
/// # Example
///
/// ```
/// use draftforge_core::{Player, Position};
///
/// let p = Player::new("A. Davis", "LAL", ["PF", "C"], 10_800, 52.1);
/// assert!(p.plays(&Position::new("C")));
/// assert!(!p.plays(&Position::new("PG")));
/// assert_eq!(p.value(), 52.1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Display name, unique within a pool.
    pub name: String,
    /// Team identifier.
    pub team: String,
    /// Positions this player is eligible for.
    pub positions: SmallVec<[Position; 2]>,
    /// Salary / cost against the cap.
    pub salary: u32,
    /// Projected fantasy points.
    pub projected: f64,
    /// Forced out for the next solve only. Reset every iteration.
    pub banned: bool,
    /// Forced in for the next solve only. Reset every iteration.
    pub locked: bool,
}

impl Player {
    /// Creates a new player with cleared ban/lock flags.
    pub fn new<I, P>(
        name: impl Into<String>,
        team: impl Into<String>,
        positions: I,
        salary: u32,
        projected: f64,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        Player {
            name: name.into(),
            team: team.into(),
            positions: positions.into_iter().map(Into::into).collect(),
            salary,
            projected,
            banned: false,
            locked: false,
        }
    }

    /// Returns true if the player is eligible for the given position.
    pub fn plays(&self, position: &Position) -> bool {
        self.positions.contains(position)
    }

    /// The objective coefficient for this player's decision variable.
    pub fn value(&self) -> f64 {
        self.projected
    }

    /// Clears both iteration-scoped flags.
    pub fn clear_flags(&mut self) {
        self.banned = false;
        self.locked = false;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<&str> = self.positions.iter().map(Position::as_str).collect();
        write!(
            f,
            "{} [{}] {} ${} {:.2}",
            self.name,
            positions.join("/"),
            self.team,
            self.salary,
            self.projected
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_any_listed_position() {
        let p = Player::new("G. Antetokounmpo", "MIL", ["PF", "C"], 11_500, 58.9);
        assert!(p.plays(&Position::new("PF")));
        assert!(p.plays(&Position::new("C")));
        assert!(!p.plays(&Position::new("SG")));
    }

    #[test]
    fn test_new_clears_flags() {
        let p = Player::new("S. Curry", "GSW", ["PG"], 10_200, 51.0);
        assert!(!p.banned);
        assert!(!p.locked);
    }

    #[test]
    fn test_clear_flags() {
        let mut p = Player::new("S. Curry", "GSW", ["PG"], 10_200, 51.0);
        p.banned = true;
        p.locked = true;
        p.clear_flags();
        assert!(!p.banned);
        assert!(!p.locked);
    }

    #[test]
    fn test_display() {
        let p = Player::new("L. James", "LAL", ["SF", "PF"], 10_900, 55.3);
        assert_eq!(p.to_string(), "L. James [SF/PF] LAL $10900 55.30");
    }
}
