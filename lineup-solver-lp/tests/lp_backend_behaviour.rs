#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural tests for roster search through the LP backend.

use std::cell::RefCell;

use lineup_core::test_support::{fifteen_player_pool, player};
use lineup_core::{Player, PlayerId, Position, Roster, TeamOptimizer};
use lineup_solver_lp::LpBackend;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const STAR_ID: i64 = 99;

#[fixture]
fn pool() -> RefCell<Vec<Player>> {
    RefCell::new(Vec::new())
}

#[fixture]
fn rosters() -> RefCell<Vec<Roster>> {
    RefCell::new(Vec::new())
}

#[given("the fifteen player pool")]
fn fifteen(#[from(pool)] cell: &RefCell<Vec<Player>>) {
    *cell.borrow_mut() = fifteen_player_pool();
}

#[given("the fifteen player pool without its goalkeeper")]
fn without_goalkeeper(#[from(pool)] cell: &RefCell<Vec<Player>>) {
    *cell.borrow_mut() = fifteen_player_pool()
        .into_iter()
        .filter(|p| p.position != Position::Goalkeeper)
        .collect();
}

#[given("a star forward costing {price} and scoring {score}")]
fn star_forward(price: u64, score: f64, #[from(pool)] cell: &RefCell<Vec<Player>>) {
    cell.borrow_mut()
        .push(player(STAR_ID, Position::Forward, price, score));
}

#[when("I search for {count} rosters within a budget of {budget}")]
fn search(
    count: usize,
    budget: u64,
    #[from(pool)] pool_cell: &RefCell<Vec<Player>>,
    #[from(rosters)] rosters_cell: &RefCell<Vec<Roster>>,
) {
    let found = TeamOptimizer::new(LpBackend::new())
        .top_rosters(&pool_cell.borrow(), budget, count)
        .expect("search succeeds");
    *rosters_cell.borrow_mut() = found;
}

#[then("the roster scores are {scores}")]
fn roster_scores(scores: String, #[from(rosters)] cell: &RefCell<Vec<Roster>>) {
    let expected: Vec<f64> = scores
        .split(',')
        .map(|value| value.trim().parse().expect("numeric score"))
        .collect();
    let found: Vec<f64> = cell.borrow().iter().map(Roster::total_score).collect();
    assert_eq!(found.len(), expected.len(), "scores: {found:?}");
    for (actual, wanted) in found.iter().zip(&expected) {
        assert!((actual - wanted).abs() < 1e-6, "scores: {found:?}");
    }
}

fn star_selected(cell: &RefCell<Vec<Roster>>) -> bool {
    let rosters = cell.borrow();
    let best = rosters.first().expect("one roster");
    best.player_ids().contains(&PlayerId::from(STAR_ID))
}

#[then("the star forward is not selected")]
fn star_left_out(#[from(rosters)] cell: &RefCell<Vec<Roster>>) {
    assert!(!star_selected(cell));
}

#[then("the star forward is selected")]
fn star_picked(#[from(rosters)] cell: &RefCell<Vec<Roster>>) {
    assert!(star_selected(cell));
}

#[then("no rosters are found")]
fn none_found(#[from(rosters)] cell: &RefCell<Vec<Roster>>) {
    assert!(cell.borrow().is_empty());
}

#[scenario(path = "tests/features/lp_backend.feature", index = 0)]
fn top_five(pool: RefCell<Vec<Player>>, rosters: RefCell<Vec<Roster>>) {
    let _ = (pool, rosters);
}

#[scenario(path = "tests/features/lp_backend.feature", index = 1)]
fn tight_budget(pool: RefCell<Vec<Player>>, rosters: RefCell<Vec<Roster>>) {
    let _ = (pool, rosters);
}

#[scenario(path = "tests/features/lp_backend.feature", index = 2)]
fn generous_budget(pool: RefCell<Vec<Player>>, rosters: RefCell<Vec<Roster>>) {
    let _ = (pool, rosters);
}

#[scenario(path = "tests/features/lp_backend.feature", index = 3)]
fn missing_goalkeeper(pool: RefCell<Vec<Player>>, rosters: RefCell<Vec<Roster>>) {
    let _ = (pool, rosters);
}
