//! Optimize command implementation for the lineup CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use lineup_core::{
    MipBackend, OptimizeError, OptimizePayload, OptimizeRequest, PayloadError, Price, Roster,
    TeamOptimizer,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_BUDGET, ARG_COUNT, ARG_OUTPUT, ARG_PAYLOAD, CliError, ENV_PAYLOAD_PATH};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Read a JSON player pool and print the highest-scoring \
                 distinct rosters. The payload is either an array of players \
                 or an object with `players` and optional `budget` and \
                 `count`. Flags, environment variables, and configuration \
                 files override the payload values.",
    about = "Select the best rosters from a player pool"
)]
#[ortho_config(prefix = "LINEUP")]
pub(crate) struct OptimizeArgs {
    /// Path to the JSON payload describing the player pool.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) payload_path: Option<Utf8PathBuf>,
    /// Budget ceiling for each roster.
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<Price>,
    /// Maximum number of rosters to return.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Write the result document to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON payload.
    pub(crate) payload_path: Utf8PathBuf,
    /// Budget override; the payload or default applies when absent.
    pub(crate) budget: Option<Price>,
    /// Count override; the payload or default applies when absent.
    pub(crate) count: Option<usize>,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.payload_path, ARG_PAYLOAD)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match lineup_fs::is_regular_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Apply configured overrides on top of the payload's own values.
    pub(crate) fn apply_overrides(&self, mut request: OptimizeRequest) -> OptimizeRequest {
        if let Some(budget) = self.budget {
            request.budget = budget;
        }
        if let Some(count) = self.count {
            request.count = count;
        }
        request
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let payload_path = args.payload_path.ok_or(CliError::MissingArgument {
            field: ARG_PAYLOAD,
            env: ENV_PAYLOAD_PATH,
        })?;
        Ok(Self {
            payload_path,
            budget: args.budget,
            count: args.count,
            output: args.output,
        })
    }
}

/// Builds the solver backend for the current invocation.
pub(crate) trait BackendBuilder {
    fn build(&self) -> Result<Box<dyn MipBackend>, CliError>;
}

pub(crate) struct DefaultBackendBuilder;

impl BackendBuilder for DefaultBackendBuilder {
    #[cfg(feature = "solver-lp")]
    fn build(&self) -> Result<Box<dyn MipBackend>, CliError> {
        let backend = lineup_solver_lp::LpBackend::new();
        log::debug!("using the {} engine", backend.engine());
        Ok(Box::new(backend))
    }

    #[cfg(not(feature = "solver-lp"))]
    fn build(&self) -> Result<Box<dyn MipBackend>, CliError> {
        Err(CliError::MissingFeature {
            feature: "solver-lp",
            action: "optimize",
        })
    }
}

/// Result document written on success.
#[derive(Debug, Serialize)]
struct SuccessDocument<'a> {
    success: bool,
    data: &'a [Roster],
}

pub(crate) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &DefaultBackendBuilder, &mut stdout)
}

pub(crate) fn run_optimize_with(
    args: OptimizeArgs,
    builder: &dyn BackendBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_optimize_config(args)?;
    let rosters = execute_optimize(&config, builder)?;
    let document = render_rosters(&rosters)?;
    match &config.output {
        Some(path) => lineup_fs::write_creating_parents(path, document.as_bytes()).map_err(
            |source| CliError::WriteOutput {
                target: path.to_string(),
                source,
            },
        ),
        None => writer
            .write_all(document.as_bytes())
            .map_err(|source| CliError::WriteOutput {
                target: "stdout".to_owned(),
                source,
            }),
    }
}

fn resolve_optimize_config(args: OptimizeArgs) -> Result<OptimizeConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

fn execute_optimize(
    config: &OptimizeConfig,
    builder: &dyn BackendBuilder,
) -> Result<Vec<Roster>, CliError> {
    let request = config.apply_overrides(load_optimize_request(&config.payload_path)?);
    log::info!(
        "optimizing {} players for {} rosters under budget {}",
        request.players.len(),
        request.count,
        request.budget
    );
    let optimizer = TeamOptimizer::new(builder.build()?);
    let response = optimizer.optimize(&request).map_err(|err| match err {
        OptimizeError::InvalidRequest(source) => CliError::InvalidRequest(source),
        OptimizeError::Solve(source) => CliError::Optimize { source },
    })?;
    Ok(response.rosters)
}

/// Loads and decodes the JSON payload at `path`.
///
/// Payload `budget` and `count` fall back to the engine defaults.
pub(crate) fn load_optimize_request(path: &Utf8Path) -> Result<OptimizeRequest, CliError> {
    let text = lineup_fs::read_to_string(path).map_err(|source| CliError::ReadPayload {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&text).map_err(|source| CliError::ParsePayload {
            path: path.to_path_buf(),
            source,
        })?;
    let invalid = |source: PayloadError| match source {
        PayloadError::Empty => CliError::EmptyPayload {
            path: path.to_path_buf(),
        },
        other => CliError::InvalidPayload {
            path: path.to_path_buf(),
            source: other,
        },
    };
    OptimizePayload::from_value(value)
        .and_then(OptimizePayload::into_request)
        .map_err(invalid)
}

pub(crate) fn render_rosters(rosters: &[Roster]) -> Result<String, CliError> {
    let document = SuccessDocument {
        success: true,
        data: rosters,
    };
    let mut text = serde_json::to_string_pretty(&document).map_err(CliError::SerialiseRosters)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
