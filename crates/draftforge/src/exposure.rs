//! Exposure control: steering appearance frequency across iterations.
//!
//! The controller translates exposure bounds plus the accumulated roster
//! history into forced-in/forced-out hints for the next solve. Hints only
//! tighten the base rule-set constraints, never loosen them. All randomness
//! flows through a single seedable generator injected by the caller; with no
//! generator the policy is fully deterministic (bounds order, no ambient
//! random stream), so unseeded runs are reproducible too.
//!
//! Post-run reporting (`check_exposure`, the table and matrix renderers) is
//! diagnostics only and never feeds back into the solver.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use draftforge_config::ExposureBound;
use draftforge_core::Roster;

/// Ban/lock hints for the next solve, derived from exposure bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExposureHints {
    /// Names to force out of the next solve.
    pub banned: Vec<String>,
    /// Names to force into the next solve.
    pub locked: Vec<String>,
}

/// How often each player appears across the accumulated rosters.
pub fn appearance_counts(rosters: &[Roster]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for roster in rosters {
        for player in roster.players() {
            *counts.entry(player.name.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Derives hints for the next solve.
///
/// Deterministic policy (no generator): with `t` rosters after the upcoming
/// accept, lock a player whose observed count would fall short of the
/// pro-rata minimum `min * t`, and ban a player whose count would exceed the
/// pro-rata maximum `max * t` if selected again.
///
/// Randomized policy (seeded generator): draw a target fraction uniformly in
/// `[min, max]` per player, then lock below the target and ban at or above
/// it. The caller owns the generator, so a fixed seed reproduces the whole
/// run.
pub fn exposure_hints(
    existing_rosters: &[Roster],
    bounds: &[ExposureBound],
    mut rng: Option<&mut ChaCha8Rng>,
) -> ExposureHints {
    let counts = appearance_counts(existing_rosters);
    let accepted = existing_rosters.len() as u32;
    let mut hints = ExposureHints::default();

    for bound in bounds {
        let observed = counts.get(&bound.name).copied().unwrap_or(0);

        match rng.as_deref_mut() {
            Some(rng) => {
                let target = if bound.max > bound.min {
                    rng.random_range(bound.min..=bound.max)
                } else {
                    bound.min
                };
                let fraction = if accepted == 0 {
                    0.0
                } else {
                    f64::from(observed) / f64::from(accepted)
                };
                if fraction < target {
                    hints.locked.push(bound.name.clone());
                } else {
                    hints.banned.push(bound.name.clone());
                }
            }
            None => {
                let t = f64::from(accepted + 1);
                if f64::from(observed) < bound.min * t {
                    hints.locked.push(bound.name.clone());
                } else if f64::from(observed + 1) > bound.max * t {
                    hints.banned.push(bound.name.clone());
                }
            }
        }
    }

    tracing::debug!(
        accepted,
        locked = hints.locked.len(),
        banned = hints.banned.len(),
        "derived exposure hints"
    );
    hints
}

/// Signed deviation of observed exposure from the upper bound, per player.
///
/// For a player in `c` of `N` rosters with bound `b`, the deviation is
/// `c - floor(b * N)` lineups: negative means under target, positive over.
pub fn check_exposure(rosters: &[Roster], bounds: &[ExposureBound]) -> BTreeMap<String, i64> {
    let counts = appearance_counts(rosters);
    let total = rosters.len() as f64;

    bounds
        .iter()
        .map(|bound| {
            let observed = i64::from(counts.get(&bound.name).copied().unwrap_or(0));
            let target = (bound.max * total).floor() as i64;
            (bound.name.clone(), observed - target)
        })
        .collect()
}

/// Renders per-player observed exposure against its bounds.
pub fn exposure_table(rosters: &[Roster], bounds: &[ExposureBound]) -> String {
    let counts = appearance_counts(rosters);
    let total = rosters.len().max(1) as f64;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<24} {:>8} {:>10} {:>6} {:>6}",
        "Player", "Lineups", "Exposure", "Min", "Max"
    );
    for bound in bounds {
        let observed = counts.get(&bound.name).copied().unwrap_or(0);
        let _ = writeln!(
            out,
            "{:<24} {:>8} {:>9.0}% {:>5.0}% {:>5.0}%",
            bound.name,
            observed,
            f64::from(observed) / total * 100.0,
            bound.min * 100.0,
            bound.max * 100.0
        );
    }
    out
}

/// Renders the per-roster membership grid for every player who appears at
/// least once.
pub fn exposure_matrix(rosters: &[Roster]) -> String {
    let counts = appearance_counts(rosters);

    let mut out = String::new();
    let _ = write!(out, "{:<24}", "Player");
    for i in 1..=rosters.len() {
        let _ = write!(out, " {i:>3}");
    }
    out.push('\n');

    for name in counts.keys() {
        let _ = write!(out, "{name:<24}");
        for roster in rosters {
            let mark = if roster.contains(name) { "X" } else { "." };
            let _ = write!(out, " {mark:>3}");
        }
        out.push('\n');
    }
    out
}

/// Renders the signed-deviation lines, one player per line.
pub fn deviation_report(deviations: &BTreeMap<String, i64>) -> String {
    let mut out = String::new();
    for (name, diff) in deviations {
        if *diff < 0 {
            let _ = writeln!(out, "{name} is UNDER exposure by {diff} lineups");
        } else {
            let _ = writeln!(out, "{name} is OVER exposure by {diff} lineups");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    use draftforge_core::{Player, RuleSet};

    fn roster_with(names: &[&str]) -> Roster {
        let rules = RuleSet::new("NBA", names.len() as u32, 1_000);
        let mut roster = Roster::for_rules(&rules);
        for name in names {
            roster
                .add_player(Player::new(*name, "BOS", ["G"], 10, 10.0))
                .unwrap();
        }
        roster
    }

    #[test]
    fn test_appearance_counts() {
        let rosters = vec![roster_with(&["A", "B"]), roster_with(&["A", "C"])];
        let counts = appearance_counts(&rosters);
        assert_eq!(counts.get("A"), Some(&2));
        assert_eq!(counts.get("B"), Some(&1));
        assert_eq!(counts.get("D"), None);
    }

    #[test]
    fn test_deterministic_lock_below_minimum() {
        let bounds = vec![ExposureBound::new("A", 0.5, 1.0)];
        // No rosters yet: A must be locked to track its 50% floor.
        let hints = exposure_hints(&[], &bounds, None);
        assert_eq!(hints.locked, vec!["A".to_string()]);
        assert!(hints.banned.is_empty());
    }

    #[test]
    fn test_deterministic_ban_at_maximum() {
        let bounds = vec![ExposureBound::new("A", 0.0, 0.5)];
        let rosters = vec![roster_with(&["A", "B"])];
        // A is in 1 of 1; a second appearance would exceed 0.5 * 2.
        let hints = exposure_hints(&rosters, &bounds, None);
        assert_eq!(hints.banned, vec!["A".to_string()]);
        assert!(hints.locked.is_empty());
    }

    #[test]
    fn test_deterministic_no_hint_inside_window() {
        let bounds = vec![ExposureBound::new("A", 0.0, 1.0)];
        let rosters = vec![roster_with(&["A", "B"])];
        let hints = exposure_hints(&rosters, &bounds, None);
        assert!(hints.banned.is_empty());
        assert!(hints.locked.is_empty());
    }

    #[test]
    fn test_random_policy_is_seed_deterministic() {
        let bounds = vec![
            ExposureBound::new("A", 0.2, 0.8),
            ExposureBound::new("B", 0.1, 0.9),
        ];
        let rosters = vec![roster_with(&["A"]), roster_with(&["B"])];

        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let h1 = exposure_hints(&rosters, &bounds, Some(&mut rng1));
        let h2 = exposure_hints(&rosters, &bounds, Some(&mut rng2));
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_random_policy_always_hints_every_bound() {
        let bounds = vec![
            ExposureBound::new("A", 0.2, 0.8),
            ExposureBound::new("B", 0.1, 0.9),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let hints = exposure_hints(&[], &bounds, Some(&mut rng));
        assert_eq!(hints.banned.len() + hints.locked.len(), 2);
    }

    #[test]
    fn test_check_exposure_signed_deviation() {
        let rosters = vec![
            roster_with(&["A", "B"]),
            roster_with(&["A", "C"]),
            roster_with(&["A", "B"]),
            roster_with(&["C", "D"]),
        ];
        let bounds = vec![
            ExposureBound::new("A", 0.0, 0.5), // floor(0.5 * 4) = 2, observed 3
            ExposureBound::new("B", 0.0, 0.75), // floor(0.75 * 4) = 3, observed 2
        ];
        let deviations = check_exposure(&rosters, &bounds);
        assert_eq!(deviations.get("A"), Some(&1));
        assert_eq!(deviations.get("B"), Some(&-1));
    }

    #[test]
    fn test_deviation_report_wording() {
        let mut deviations = BTreeMap::new();
        deviations.insert("A".to_string(), 1i64);
        deviations.insert("B".to_string(), -2i64);
        let report = deviation_report(&deviations);
        assert!(report.contains("A is OVER exposure by 1 lineups"));
        assert!(report.contains("B is UNDER exposure by -2 lineups"));
    }

    #[test]
    fn test_matrix_marks_membership() {
        let rosters = vec![roster_with(&["A", "B"]), roster_with(&["B", "C"])];
        let matrix = exposure_matrix(&rosters);
        let row_a = matrix.lines().find(|l| l.starts_with('A')).unwrap();
        assert!(row_a.contains('X'));
        assert!(row_a.contains('.'));
    }
}
