//! Single-shot and multi-iteration optimization entry points.
//!
//! `run` performs one solve: overlay applied, model formulated, roster
//! extracted. `run_multi` drives N strictly serialized iterations with
//! exposure control, halting on the first infeasible solve (hints only
//! tighten the base constraints, so later iterations cannot recover) and
//! reporting exposure deviations over whatever accumulated.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use draftforge_config::{ExposureBound, OptimizerSettings, PlayerPoolSettings};
use draftforge_core::{Player, Result, Roster, RuleSet};
use draftforge_solver::Optimizer;

use crate::constraints::LineupConstraints;
use crate::exposure::{
    self, check_exposure, deviation_report, exposure_matrix, exposure_table, ExposureHints,
};
use crate::pool::filter_pool;

/// Solves one roster for the rule set.
///
/// Returns `Ok(None)` when no feasible assignment exists; infeasibility is a
/// first-class outcome, not an error. In verbose mode the roster (or the
/// active constraints and pool size, on failure) is printed to stdout.
///
/// # Errors
///
/// Returns an error for conflicting ban/lock configuration or an invalid
/// rule set, never for infeasibility.
pub fn run(
    rule_set: &RuleSet,
    player_pool: &[Player],
    pool_settings: &PlayerPoolSettings,
    settings: &OptimizerSettings,
) -> Result<Option<Roster>> {
    rule_set.validate()?;
    let mut players = filter_pool(player_pool, pool_settings);
    run_iteration(rule_set, &mut players, pool_settings, settings, None)
}

/// Runs up to `iterations` solves, steering per-player exposure toward the
/// given bounds, and returns the accepted rosters plus the signed exposure
/// deviations computed over them.
///
/// Accepted rosters are also appended to `settings.existing_rosters`, which
/// the exposure controller reads when deriving hints for the next iteration.
/// The loop halts at the first infeasible iteration, returning fewer rosters
/// than requested. A seed in `settings.random_seed` makes the whole run
/// reproducible; without one the exposure policy is deterministic by bounds
/// order.
///
/// # Errors
///
/// Same conditions as [`run`]; infeasibility only shortens the result.
pub fn run_multi(
    iterations: u32,
    rule_set: &RuleSet,
    player_pool: &[Player],
    pool_settings: &PlayerPoolSettings,
    settings: &mut OptimizerSettings,
    exposure_bounds: Option<&[ExposureBound]>,
) -> Result<(Vec<Roster>, BTreeMap<String, i64>)> {
    rule_set.validate()?;

    // Seeded once per run; the generator is owned here, so nothing can
    // re-seed mid-run.
    let mut rng = settings.random_seed.map(ChaCha8Rng::seed_from_u64);
    let mut players = filter_pool(player_pool, pool_settings);
    let mut rosters = Vec::new();

    for iteration in 0..iterations {
        let hints = exposure_bounds.map(|bounds| {
            exposure::exposure_hints(&settings.existing_rosters, bounds, rng.as_mut())
        });

        let roster = run_iteration(
            rule_set,
            &mut players,
            pool_settings,
            settings,
            hints.as_ref(),
        )?;

        match roster {
            Some(roster) => {
                tracing::debug!(iteration, projected = roster.projected(), "roster accepted");
                settings.existing_rosters.push(roster.clone());
                rosters.push(roster);
            }
            None => {
                tracing::debug!(iteration, "infeasible iteration, halting run");
                break;
            }
        }
    }

    let deviations = exposure_bounds
        .map(|bounds| check_exposure(&rosters, bounds))
        .unwrap_or_default();

    if settings.verbose && !rosters.is_empty() {
        if let Some(bounds) = exposure_bounds {
            println!("{}", exposure_table(&rosters, bounds));
            println!("{}", exposure_matrix(&rosters));
            print!("{}", deviation_report(&deviations));
        }
    }

    Ok((rosters, deviations))
}

/// One `Ready -> Solving -> Accepted | Rejected` pass.
fn run_iteration(
    rule_set: &RuleSet,
    players: &mut [Player],
    pool_settings: &PlayerPoolSettings,
    settings: &OptimizerSettings,
    hints: Option<&ExposureHints>,
) -> Result<Option<Roster>> {
    // Fresh overlay every iteration: flags never persist across solves.
    LineupConstraints::reset_pool(players);

    let mut overlay = LineupConstraints::new();
    for name in &pool_settings.banned {
        overlay.ban(name.as_str())?;
    }
    for name in &pool_settings.locked {
        overlay.lock(name.as_str())?;
    }
    if let Some(hints) = hints {
        // Hints are best-effort: one that contradicts a caller-supplied
        // ban/lock is dropped rather than failing the run.
        for name in &hints.banned {
            if overlay.ban(name.as_str()).is_err() {
                tracing::debug!(%name, "exposure ban conflicts with static lock, skipping");
            }
        }
        for name in &hints.locked {
            if overlay.lock(name.as_str()).is_err() {
                tracing::debug!(%name, "exposure lock conflicts with static ban, skipping");
            }
        }
    }
    overlay.apply(players);

    let mut optimizer = Optimizer::new(players, rule_set);
    match optimizer.solve() {
        Some(values) => {
            let mut roster = Roster::for_rules(rule_set);
            for (player, selected) in players.iter().zip(&values) {
                if *selected {
                    roster.add_player(player.clone())?;
                }
            }
            if settings.verbose {
                println!("Optimal roster for: {}", rule_set.league);
                print!("{roster}");
            }
            Ok(Some(roster))
        }
        None => {
            if settings.verbose {
                println!(
                    "No solution found. Active constraints: {:?}. Player count: {}",
                    optimizer.model().constraint_labels(),
                    players.len()
                );
            }
            Ok(None)
        }
    }
}
