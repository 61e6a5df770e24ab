#![expect(
    clippy::expect_used,
    reason = "property tests use expect for readable failures"
)]

//! Property-based tests for the LP backend.
//!
//! Generated pools are solved twice: once with [`LpBackend`] and once with
//! the enumerating reference backend, which visits every assignment.
//!
//! # Invariants tested
//!
//! - **Optimality:** the k-th roster score matches the exact k-th score.
//! - **Feasibility:** every roster fills the quotas within the budget.
//! - **Distinctness:** no roster is produced twice.
//! - **Idempotence:** repeating a search returns identical rosters.


use lineup_core::test_support::EnumeratingBackend;
use lineup_core::{Position, Roster, TeamOptimizer};
use lineup_solver_lp::LpBackend;
use proptest::prelude::*;

use proptest_support::pool_strategy;

const ROSTERS: usize = 3;

fn scores(rosters: &[Roster]) -> Vec<f64> {
    rosters.iter().map(Roster::total_score).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: LP scores match exhaustive enumeration position by position.
    #[test]
    fn scores_match_enumeration(pool in pool_strategy(), budget in 60_u64..=220) {
        let exact = TeamOptimizer::new(EnumeratingBackend::default())
            .top_rosters(&pool, budget, ROSTERS)
            .expect("enumeration succeeds");
        let found = TeamOptimizer::new(LpBackend::new())
            .top_rosters(&pool, budget, ROSTERS)
            .expect("lp search succeeds");

        let (exact, found) = (scores(&exact), scores(&found));
        prop_assert_eq!(exact.len(), found.len(), "exact {:?} vs lp {:?}", exact, found);
        for (wanted, actual) in exact.iter().zip(&found) {
            prop_assert!((wanted - actual).abs() < 1e-6, "exact {:?} vs lp {:?}", exact, found);
        }
    }

    /// Property: rosters are feasible, distinct, and ordered by score.
    #[test]
    fn rosters_are_feasible_and_distinct(pool in pool_strategy(), budget in 60_u64..=220) {
        let rosters = TeamOptimizer::new(LpBackend::new())
            .top_rosters(&pool, budget, ROSTERS)
            .expect("lp search succeeds");

        for (index, roster) in rosters.iter().enumerate() {
            prop_assert!(roster.total_price() <= budget);
            for position in Position::ALL {
                let filled = roster
                    .players()
                    .iter()
                    .filter(|p| p.position == position)
                    .count();
                prop_assert_eq!(filled, position.quota());
            }
            for later in rosters.iter().skip(index + 1) {
                prop_assert_ne!(roster.player_ids(), later.player_ids());
                prop_assert!(roster.total_score() + 1e-6 >= later.total_score());
            }
        }
    }

    /// Property: repeating a search with the same inputs gives the same rosters.
    #[test]
    fn repeated_searches_agree(pool in pool_strategy(), budget in 60_u64..=220) {
        let optimizer = TeamOptimizer::new(LpBackend::new());
        let first = optimizer
            .top_rosters(&pool, budget, ROSTERS)
            .expect("first lp search succeeds");
        let second = optimizer
            .top_rosters(&pool, budget, ROSTERS)
            .expect("second lp search succeeds");
        prop_assert_eq!(first, second);
    }
}
