//! Facade crate for the lineup engine.
//!
//! This crate re-exports the core domain types and exposes the default
//! solver backend behind a feature flag.

#![forbid(unsafe_code)]

pub use lineup_core::{
    BackendError, BinaryProgram, DEFAULT_BUDGET, DEFAULT_COUNT, Diagnostics, ExclusionSet,
    LinearConstraint, MAX_PRICE, MipBackend, MipSolution, MipStatus, OptimizeError, OptimizeRequest,
    OptimizeResponse, Player, PlayerError, PlayerId, Position, Price, ROSTER_SIZE, Relation,
    RequestValidationError, Roster, RosterError, SolveError, TeamOptimizer, TeamSolver,
};

#[cfg(feature = "serde")]
pub use lineup_core::{OptimizePayload, PayloadError, PlayerRecord};

#[cfg(feature = "solver-lp")]
pub use lineup_solver_lp::LpBackend;
