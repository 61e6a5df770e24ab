//! Delegate 0/1 integer programs to an external solver.
//!
//! The [`MipBackend`] trait hides the concrete mixed-integer solver behind a
//! single call: a [`BinaryProgram`] goes in, a [`MipSolution`] carrying a
//! status and one value per variable comes out. Backends report their own
//! failures as [`BackendError`]; infeasibility is a status, not an error.

mod backend;
mod error;
mod program;

pub use backend::{MipBackend, MipSolution, MipStatus};
pub use error::BackendError;
pub use program::{BinaryProgram, LinearConstraint, Relation};
