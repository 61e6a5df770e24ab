//! Core domain types for the lineup engine.
//!
//! Players, rosters, and the integer-programming formulation that selects
//! them live here. Constructors return `Result` to surface invalid input
//! early, and the solver itself is reached through the [`MipBackend`] trait
//! so concrete engines can live in their own crates.

pub mod exclusion;
pub mod mip;
pub mod optimizer;
pub mod player;
pub mod request;
pub mod roster;
pub mod solver;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use exclusion::ExclusionSet;
pub use mip::{
    BackendError, BinaryProgram, LinearConstraint, MipBackend, MipSolution, MipStatus, Relation,
};
pub use optimizer::{Diagnostics, OptimizeError, OptimizeResponse, TeamOptimizer};
#[cfg(feature = "serde")]
pub use player::PlayerRecord;
pub use player::{
    MAX_PRICE, ParsePositionError, Player, PlayerError, PlayerId, Position, Price,
};
#[cfg(feature = "serde")]
pub use request::{OptimizePayload, PayloadError};
pub use request::{DEFAULT_BUDGET, DEFAULT_COUNT, OptimizeRequest, RequestValidationError};
pub use roster::{ROSTER_SIZE, Roster, RosterError};
pub use solver::{EXCLUSION_OVERLAP_LIMIT, SELECTION_TOLERANCE, SolveError, TeamSolver, formulate};
