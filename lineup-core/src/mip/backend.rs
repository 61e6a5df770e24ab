//! The solver capability consumed by [`crate::TeamSolver`].

use super::error::BackendError;
use super::program::BinaryProgram;

/// Outcome category reported by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MipStatus {
    /// An optimal assignment was found.
    Optimal,
    /// No assignment satisfies every constraint.
    Infeasible,
}

/// Status and variable assignment returned by a backend.
///
/// `values` holds one entry per program variable when the status is
/// [`MipStatus::Optimal`] and is empty otherwise. Values are nominally 0 or 1
/// but may carry solver noise.
#[derive(Debug, Clone, PartialEq)]
pub struct MipSolution {
    /// Solve status.
    pub status: MipStatus,
    /// Assigned variable values.
    pub values: Vec<f64>,
}

impl MipSolution {
    /// An optimal solution with the given assignment.
    pub const fn optimal(values: Vec<f64>) -> Self {
        Self {
            status: MipStatus::Optimal,
            values,
        }
    }

    /// An infeasible outcome.
    pub const fn infeasible() -> Self {
        Self {
            status: MipStatus::Infeasible,
            values: Vec::new(),
        }
    }
}

/// Maximise a [`BinaryProgram`] exactly.
///
/// Implementations must return the optimum of the program, report
/// infeasibility through [`MipStatus::Infeasible`], and keep tie-breaking
/// deterministic for identical programs. Backends must be `Send + Sync` so a
/// single instance can serve several callers.
///
/// # Examples
///
/// ```rust
/// use lineup_core::{BackendError, BinaryProgram, MipBackend, MipSolution};
///
/// struct AllOnes;
///
/// impl MipBackend for AllOnes {
///     fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
///         let values = vec![1.0; program.variable_count()];
///         if program.is_feasible(&values, 1e-9) {
///             Ok(MipSolution::optimal(values))
///         } else {
///             Ok(MipSolution::infeasible())
///         }
///     }
/// }
///
/// let solution = AllOnes.maximise(&BinaryProgram::new(vec![1.0, 2.0]))?;
/// assert_eq!(solution.values, vec![1.0, 1.0]);
/// # Ok::<(), BackendError>(())
/// ```
pub trait MipBackend: Send + Sync {
    /// Solve `program`, maximising its objective.
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError>;
}

impl<B: MipBackend + ?Sized> MipBackend for &B {
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        (**self).maximise(program)
    }
}

impl<B: MipBackend + ?Sized> MipBackend for Box<B> {
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        (**self).maximise(program)
    }
}
