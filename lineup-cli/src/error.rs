//! Error types emitted by the lineup CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use lineup_core::{PayloadError, RequestValidationError, SolveError};
use thiserror::Error;

/// Who is responsible for a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The caller supplied bad arguments or a bad payload.
    ClientError,
    /// The engine failed on valid input.
    ServerError,
}

impl Outcome {
    /// Process exit status for this outcome.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::ClientError => 2,
            Self::ServerError => 1,
        }
    }
}

/// Errors emitted by the lineup CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it on the command line or set {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        feature: &'static str,
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading the payload file failed.
    #[error("failed to read payload at {path:?}: {source}")]
    ReadPayload {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload is not valid JSON.
    #[error("failed to parse payload JSON at {path:?}: {source}")]
    ParsePayload {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The payload decoded but carried no players.
    #[error("No input data provided")]
    EmptyPayload { path: Utf8PathBuf },
    /// The payload JSON does not describe a player pool.
    #[error("payload in {path:?} is invalid: {source}")]
    InvalidPayload {
        path: Utf8PathBuf,
        #[source]
        source: PayloadError,
    },
    /// The merged request failed validation.
    #[error("request is invalid: {0}")]
    InvalidRequest(#[source] RequestValidationError),
    /// The solver failed on a valid request.
    #[error("optimization failed: {source}")]
    Optimize { source: SolveError },
    /// Serialising the result document failed.
    #[error("failed to serialise rosters: {0}")]
    SerialiseRosters(#[source] serde_json::Error),
    /// Writing the result document failed.
    #[error("failed to write rosters to {target}: {source}")]
    WriteOutput {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Classify the failure for exit status and reporting.
    pub const fn outcome(&self) -> Outcome {
        match self {
            Self::ArgumentParsing(_)
            | Self::Configuration(_)
            | Self::MissingArgument { .. }
            | Self::MissingSourceFile { .. }
            | Self::SourcePathNotFile { .. }
            | Self::ReadPayload { .. }
            | Self::ParsePayload { .. }
            | Self::EmptyPayload { .. }
            | Self::InvalidPayload { .. }
            | Self::InvalidRequest(_) => Outcome::ClientError,
            Self::MissingFeature { .. }
            | Self::InspectSourcePath { .. }
            | Self::Optimize { .. }
            | Self::SerialiseRosters(_)
            | Self::WriteOutput { .. } => Outcome::ServerError,
        }
    }

    /// Failure document printed in place of the result.
    pub fn failure_document(&self) -> String {
        let document = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        format!("{document:#}")
    }
}
