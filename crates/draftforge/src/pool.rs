//! Static pool filtering, upstream of the optimizer.
//!
//! The optimizer never re-filters: whatever this returns is the ordered
//! candidate pool for every iteration of a run.

use draftforge_config::PlayerPoolSettings;
use draftforge_core::Player;

/// Narrows the pool by static eligibility, preserving input order.
///
/// Ban/lock lists in the settings are not filters; they seed the constraint
/// overlay instead.
pub fn filter_pool(pool: &[Player], settings: &PlayerPoolSettings) -> Vec<Player> {
    let filtered: Vec<Player> = pool
        .iter()
        .filter(|p| settings.min_salary.is_none_or(|min| p.salary >= min))
        .filter(|p| settings.max_salary.is_none_or(|max| p.salary <= max))
        .filter(|p| settings.min_projected.is_none_or(|min| p.projected >= min))
        .cloned()
        .collect();

    tracing::debug!(
        input = pool.len(),
        output = filtered.len(),
        "filtered player pool"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Player> {
        vec![
            Player::new("Cheap", "BOS", ["G"], 3_000, 12.0),
            Player::new("Mid", "BOS", ["G"], 6_000, 28.0),
            Player::new("Star", "BOS", ["G"], 11_000, 55.0),
        ]
    }

    #[test]
    fn test_no_settings_passes_everything() {
        let filtered = filter_pool(&pool(), &PlayerPoolSettings::new());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_salary_window() {
        let settings = PlayerPoolSettings::new()
            .with_min_salary(4_000)
            .with_max_salary(10_000);
        let filtered = filter_pool(&pool(), &settings);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Mid");
    }

    #[test]
    fn test_projection_floor() {
        let settings = PlayerPoolSettings::new().with_min_projected(20.0);
        let filtered = filter_pool(&pool(), &settings);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let settings = PlayerPoolSettings::new().with_min_projected(0.0);
        let names: Vec<_> = filter_pool(&pool(), &settings)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Cheap", "Mid", "Star"]);
    }
}
