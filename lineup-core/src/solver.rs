//! Single-team solver: one integer program, one roster.
//!
//! [`TeamSolver`] encodes roster selection as a [`BinaryProgram`] with one
//! indicator per player, hands it to a [`MipBackend`], and reads the optimal
//! assignment back into a [`Roster`]. Infeasibility is a normal outcome and is
//! reported as `Ok(None)`.

use thiserror::Error;

use crate::{
    BackendError, BinaryProgram, ExclusionSet, MipBackend, MipStatus, Player, Position, Price,
    ROSTER_SIZE, Relation, Roster, RosterError,
};

/// Indicator values at or above `1 - SELECTION_TOLERANCE` count as selected.
pub const SELECTION_TOLERANCE: f64 = 1e-6;

/// Largest number of players a new roster may share with any prior roster.
///
/// One less than [`ROSTER_SIZE`]: only exact repeats are forbidden.
pub const EXCLUSION_OVERLAP_LIMIT: usize = ROSTER_SIZE - 1;

/// Errors returned by [`TeamSolver::solve`].
///
/// All variants are solver faults: the backend failed or returned an
/// assignment that does not describe a valid roster.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The backend failed to run.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The assignment did not cover every player.
    #[error("backend returned {found} values for {expected} players")]
    AssignmentLength {
        /// Players in the pool.
        expected: usize,
        /// Values returned.
        found: usize,
    },
    /// The selected players do not form a valid roster.
    #[error("backend selection is not a valid roster: {0}")]
    InvalidRoster(#[source] RosterError),
    /// The selected players cost more than the budget.
    #[error("backend selection costs {total_price}, above the budget of {budget}")]
    BudgetExceeded {
        /// Price of the selection.
        total_price: Price,
        /// Budget ceiling.
        budget: Price,
    },
    /// The selection repeats a roster the exclusions forbid.
    #[error("backend selection repeats an excluded roster")]
    RepeatedRoster,
}

/// Solve one roster selection with a pluggable backend.
///
/// # Examples
/// ```
/// use lineup_core::{
///     BackendError, BinaryProgram, ExclusionSet, MipBackend, MipSolution, TeamSolver,
/// };
///
/// struct NeverFeasible;
///
/// impl MipBackend for NeverFeasible {
///     fn maximise(&self, _program: &BinaryProgram) -> Result<MipSolution, BackendError> {
///         Ok(MipSolution::infeasible())
///     }
/// }
///
/// let solver = TeamSolver::new(NeverFeasible);
/// let roster = solver.solve(&[], 100, &ExclusionSet::new())?;
/// assert!(roster.is_none());
/// # Ok::<(), lineup_core::SolveError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamSolver<B> {
    backend: B,
}

impl<B> TeamSolver<B> {
    /// Wrap a backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }
}

impl<B: MipBackend> TeamSolver<B> {
    /// Return the best roster satisfying budget, quotas, and exclusions.
    ///
    /// Returns `Ok(None)` when no such roster exists.
    pub fn solve(
        &self,
        players: &[Player],
        budget: Price,
        exclusions: &ExclusionSet,
    ) -> Result<Option<Roster>, SolveError> {
        if let Some(position) = unfillable_position(players) {
            log::debug!("pool cannot fill the {position} quota; skipping solve");
            return Ok(None);
        }

        let program = formulate(players, budget, exclusions);
        let solution = self.backend.maximise(&program)?;
        if solution.status == MipStatus::Infeasible {
            log::debug!(
                "no feasible roster with {} exclusions under budget {budget}",
                exclusions.len()
            );
            return Ok(None);
        }
        if solution.values.len() != players.len() {
            return Err(SolveError::AssignmentLength {
                expected: players.len(),
                found: solution.values.len(),
            });
        }

        let roster = Roster::new(selected_players(players, &solution.values))
            .map_err(SolveError::InvalidRoster)?;
        if roster.total_price() > budget {
            return Err(SolveError::BudgetExceeded {
                total_price: roster.total_price(),
                budget,
            });
        }
        if exclusions.contains(&roster) {
            return Err(SolveError::RepeatedRoster);
        }
        Ok(Some(roster))
    }
}

/// Build the integer program for one solve.
///
/// Variable `i` is the inclusion indicator of `players[i]`. The program
/// maximises total score subject to the budget, one equality per position
/// quota, and one overlap bound per excluded roster.
pub fn formulate(players: &[Player], budget: Price, exclusions: &ExclusionSet) -> BinaryProgram {
    let mut program = BinaryProgram::new(players.iter().map(|p| p.score).collect());

    program.add_constraint(
        "budget",
        players
            .iter()
            .enumerate()
            .map(|(index, p)| (index, p.price as f64))
            .collect(),
        Relation::AtMost,
        budget as f64,
    );

    for position in Position::ALL {
        program.add_constraint(
            format!("quota {position}"),
            indicator_terms(players, |p| p.position == position),
            Relation::Exactly,
            position.quota() as f64,
        );
    }

    for (rank, excluded) in exclusions.iter().enumerate() {
        program.add_constraint(
            format!("exclude roster {}", rank + 1),
            indicator_terms(players, |p| excluded.contains(&p.id)),
            Relation::AtMost,
            EXCLUSION_OVERLAP_LIMIT as f64,
        );
    }

    program
}

fn indicator_terms(players: &[Player], include: impl Fn(&Player) -> bool) -> Vec<(usize, f64)> {
    players
        .iter()
        .enumerate()
        .filter(|(_, p)| include(p))
        .map(|(index, _)| (index, 1.0))
        .collect()
}

fn unfillable_position(players: &[Player]) -> Option<Position> {
    Position::ALL.into_iter().find(|position| {
        players.iter().filter(|p| p.position == *position).count() < position.quota()
    })
}

fn selected_players(players: &[Player], values: &[f64]) -> Vec<Player> {
    players
        .iter()
        .zip(values)
        .filter_map(|(player, &value)| {
            if value >= 1.0 - SELECTION_TOLERANCE {
                return Some(player.clone());
            }
            if value > SELECTION_TOLERANCE {
                log::warn!(
                    "indicator for player {} is fractional ({value}); treating as unselected",
                    player.id
                );
            }
            None
        })
        .collect()
}
