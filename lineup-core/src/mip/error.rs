use thiserror::Error;

/// Errors from [`crate::mip::MipBackend::maximise`].
///
/// These are solver faults and propagate to the caller; an infeasible program
/// is reported through [`crate::mip::MipStatus::Infeasible`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The solver failed while processing the program.
    #[error("solver backend failed: {message}")]
    Fault {
        /// Description supplied by the backend.
        message: String,
    },
    /// The program exceeds what the backend can handle.
    #[error("program with {variables} variables exceeds the backend limit of {limit}")]
    TooLarge {
        /// Variables in the rejected program.
        variables: usize,
        /// Largest supported variable count.
        limit: usize,
    },
}
