//! Behavioural coverage for the top-K roster search.

use super::super::{OptimizeError, OptimizeResponse, TeamOptimizer};
use crate::test_support::{EnumeratingBackend, fifteen_player_pool, formation, player};
use crate::{OptimizeRequest, Player, Position, Roster};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

type Outcome = Option<Result<OptimizeResponse, OptimizeError>>;

#[fixture]
pub fn pool() -> RefCell<Vec<Player>> {
    RefCell::new(Vec::new())
}

#[fixture]
pub fn outcome() -> RefCell<Outcome> {
    RefCell::new(None)
}

fn rosters(cell: &RefCell<Outcome>) -> Vec<Roster> {
    match cell.borrow().as_ref() {
        Some(Ok(response)) => response.rosters.clone(),
        Some(Err(err)) => panic!("expected rosters, got {err}"),
        None => panic!("the search must run first"),
    }
}

#[given("a pool of fifteen players priced at 10 each")]
fn fifteen_players(#[from(pool)] cell: &RefCell<Vec<Player>>) {
    *cell.borrow_mut() = fifteen_player_pool();
}

#[given("a pool with only one defender")]
fn one_defender(#[from(pool)] cell: &RefCell<Vec<Player>>) {
    *cell.borrow_mut() = formation(1, 10, 2.0)
        .into_iter()
        .filter(|p| p.position != Position::Defence)
        .chain([player(40, Position::Defence, 10, 8.0)])
        .collect();
}

#[given("a pool holding exactly one formation")]
fn one_formation(#[from(pool)] cell: &RefCell<Vec<Player>>) {
    *cell.borrow_mut() = formation(1, 10, 2.0);
}

#[when("I request {count} rosters within a budget of {budget}")]
fn request_rosters(
    count: usize,
    budget: u64,
    #[from(pool)] pool_cell: &RefCell<Vec<Player>>,
    #[from(outcome)] outcome_cell: &RefCell<Outcome>,
) {
    let request = OptimizeRequest::new(pool_cell.borrow().clone())
        .with_budget(budget)
        .with_count(count);
    let optimizer = TeamOptimizer::new(EnumeratingBackend::default());
    *outcome_cell.borrow_mut() = Some(optimizer.optimize(&request));
}

#[then("exactly {count} rosters are returned")]
fn roster_count(count: usize, #[from(outcome)] cell: &RefCell<Outcome>) {
    assert_eq!(rosters(cell).len(), count);
}

#[then("no rosters are returned")]
fn no_rosters(#[from(outcome)] cell: &RefCell<Outcome>) {
    assert!(rosters(cell).is_empty());
}

#[then("the roster scores are {scores}")]
fn roster_scores(scores: String, #[from(outcome)] cell: &RefCell<Outcome>) {
    let expected: Vec<f64> = scores
        .split(',')
        .map(|value| {
            value
                .trim()
                .parse()
                .unwrap_or_else(|err| panic!("bad score {value}: {err}"))
        })
        .collect();
    let found: Vec<f64> = rosters(cell).iter().map(Roster::total_score).collect();
    assert_eq!(found.len(), expected.len());
    for (actual, wanted) in found.iter().zip(&expected) {
        assert!((actual - wanted).abs() < 1e-9, "scores: {found:?}");
    }
}

#[then("no two rosters contain the same players")]
fn distinct_rosters(#[from(outcome)] cell: &RefCell<Outcome>) {
    let ids: Vec<_> = rosters(cell).iter().map(Roster::player_ids).collect();
    for (index, roster) in ids.iter().enumerate() {
        assert!(ids[index + 1..].iter().all(|later| later != roster));
    }
}

#[then("the request is rejected as invalid")]
fn rejected(#[from(outcome)] cell: &RefCell<Outcome>) {
    match cell.borrow().as_ref() {
        Some(Err(OptimizeError::InvalidRequest(_))) => {}
        other => panic!("expected an invalid request, got {other:?}"),
    }
}

#[scenario(path = "tests/features/optimizer.feature", index = 0)]
fn top_five_rosters(pool: RefCell<Vec<Player>>, outcome: RefCell<Outcome>) {
    let _ = (pool, outcome);
}

#[scenario(path = "tests/features/optimizer.feature", index = 1)]
fn too_few_defenders(pool: RefCell<Vec<Player>>, outcome: RefCell<Outcome>) {
    let _ = (pool, outcome);
}

#[scenario(path = "tests/features/optimizer.feature", index = 2)]
fn single_formation(pool: RefCell<Vec<Player>>, outcome: RefCell<Outcome>) {
    let _ = (pool, outcome);
}

#[scenario(path = "tests/features/optimizer.feature", index = 3)]
fn zero_count(pool: RefCell<Vec<Player>>, outcome: RefCell<Outcome>) {
    let _ = (pool, outcome);
}
