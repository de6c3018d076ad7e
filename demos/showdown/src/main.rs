//! NBA Showdown Example
//!
//! Builds a portfolio of five lineups from a small slate, keeping the two
//! chalk plays under 60% exposure, and prints the resulting rosters plus the
//! exposure report.

use draftforge::prelude::*;

fn slate() -> Vec<Player> {
    vec![
        Player::new("S. Curry", "GSW", ["PG", "G"], 10_200, 51.0),
        Player::new("L. James", "LAL", ["SF", "F"], 10_900, 55.3),
        Player::new("A. Davis", "LAL", ["PF", "C", "F"], 10_800, 52.1),
        Player::new("J. Tatum", "BOS", ["SF", "F"], 9_800, 48.7),
        Player::new("J. Brown", "BOS", ["SG", "G"], 8_900, 42.5),
        Player::new("D. Fox", "SAC", ["PG", "G"], 8_300, 41.2),
        Player::new("D. Sabonis", "SAC", ["C"], 9_400, 47.9),
        Player::new("K. Towns", "NYK", ["PF", "C", "F"], 9_100, 44.8),
        Player::new("J. Brunson", "NYK", ["PG", "G"], 8_700, 43.6),
        Player::new("O. Anunoby", "NYK", ["SF", "F"], 6_800, 31.4),
        Player::new("D. White", "BOS", ["SG", "G"], 7_200, 34.9),
        Player::new("A. Wiggins", "GSW", ["SF", "F"], 5_900, 27.8),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let rules = RuleSet::new("NBA", 5, 45_000)
        .with_quota("G", 1, 3)
        .with_quota("F", 1, 3)
        .with_quota("C", 1, 2)
        .with_team_limit(3);

    let bounds = vec![
        ExposureBound::new("L. James", 0.2, 0.6),
        ExposureBound::new("A. Davis", 0.2, 0.6),
    ];

    let mut settings = OptimizerSettings::new()
        .with_verbose(true)
        .with_random_seed(2_026);

    let (rosters, deviations) = run_multi(
        5,
        &rules,
        &slate(),
        &PlayerPoolSettings::new(),
        &mut settings,
        Some(&bounds),
    )
    .expect("valid configuration");

    println!("\nGenerated {} of 5 requested lineups", rosters.len());
    for (name, diff) in &deviations {
        println!("  {name}: {diff:+} lineups vs bound");
    }
}
