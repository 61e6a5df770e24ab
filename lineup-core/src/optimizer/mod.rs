//! Top-K roster search.
//!
//! [`TeamOptimizer`] solves repeatedly with a [`TeamSolver`]. After each
//! solve the roster is recorded in an [`ExclusionSet`] so the next solve must
//! differ from every roster found so far. The search stops after `count`
//! rosters or at the first infeasible solve, whichever comes first.

use std::time::{Duration, Instant};

use thiserror::Error;

use crate::{
    ExclusionSet, MipBackend, OptimizeRequest, Player, Price, RequestValidationError, Roster,
    SolveError, TeamSolver,
};

/// Counters gathered during one optimisation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Solve attempts, including a final one that found nothing.
    pub solves: usize,
    /// Wall-clock time spent in the search.
    pub solve_time: Duration,
}

/// Rosters produced for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResponse {
    /// Rosters in production order; scores never increase.
    pub rosters: Vec<Roster>,
    /// Search counters.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`TeamOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// The request failed validation before any solve.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
    /// A solve failed.
    #[error("solve failed: {0}")]
    Solve(#[from] SolveError),
}

/// Produce up to `count` distinct rosters in non-increasing score order.
///
/// # Examples
/// ```
/// use lineup_core::{
///     BackendError, BinaryProgram, MipBackend, MipSolution, OptimizeRequest, TeamOptimizer,
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
/// let optimizer = TeamOptimizer::new(NeverFeasible);
/// let response = optimizer.optimize(&OptimizeRequest::new(Vec::new()))?;
/// assert!(response.rosters.is_empty());
/// # Ok::<(), lineup_core::OptimizeError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TeamOptimizer<B> {
    solver: TeamSolver<B>,
}

impl<B> TeamOptimizer<B> {
    /// Build an optimiser over `backend`.
    pub const fn new(backend: B) -> Self {
        Self {
            solver: TeamSolver::new(backend),
        }
    }
}

impl<B: MipBackend> TeamOptimizer<B> {
    /// Validate `request` and run the search.
    pub fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        request.validate()?;
        let started = Instant::now();
        let (rosters, solves) = self.search(&request.players, request.budget, request.count)?;
        let diagnostics = Diagnostics {
            solves,
            solve_time: started.elapsed(),
        };
        log::info!(
            "produced {} of {} requested rosters from {} players in {} solves ({:?})",
            rosters.len(),
            request.count,
            request.players.len(),
            diagnostics.solves,
            diagnostics.solve_time
        );
        Ok(OptimizeResponse {
            rosters,
            diagnostics,
        })
    }

    /// Run the search without request validation.
    ///
    /// A `count` of zero returns no rosters and never calls the backend.
    pub fn top_rosters(
        &self,
        players: &[Player],
        budget: Price,
        count: usize,
    ) -> Result<Vec<Roster>, SolveError> {
        self.search(players, budget, count).map(|(rosters, _)| rosters)
    }

    fn search(
        &self,
        players: &[Player],
        budget: Price,
        count: usize,
    ) -> Result<(Vec<Roster>, usize), SolveError> {
        let mut exclusions = ExclusionSet::new();
        let mut rosters = Vec::with_capacity(count.min(16));
        let mut solves = 0;
        while rosters.len() < count {
            solves += 1;
            let Some(roster) = self.solver.solve(players, budget, &exclusions)? else {
                break;
            };
            log::debug!(
                "roster {} scores {} at price {}",
                rosters.len() + 1,
                roster.total_score(),
                roster.total_price()
            );
            exclusions.record(&roster);
            rosters.push(roster);
        }
        Ok((rosters, solves))
    }
}
