//! `LpBackend` implementation backed by `good_lp`.

use good_lp::{
    Constraint, Expression, ProblemVariables, ResolutionError, Solution, SolverModel, Variable,
    variable, variables,
};
use lineup_core::{
    BackendError, BinaryProgram, LinearConstraint, MipBackend, MipSolution, Relation,
};

/// Slack allowed when a constraint has no terms and is checked directly.
const CONSTANT_TOLERANCE: f64 = 1e-9;

#[cfg(feature = "cbc")]
const ENGINE: &str = "cbc";
#[cfg(not(feature = "cbc"))]
const ENGINE: &str = "microlp";

/// Exact 0/1 solver built on `good_lp`.
///
/// The backend is stateless: every call builds a fresh model, so one instance
/// can be shared freely between threads.
///
/// # Examples
/// ```
/// use lineup_core::{BinaryProgram, MipBackend, MipStatus, Relation};
/// use lineup_solver_lp::LpBackend;
///
/// let mut program = BinaryProgram::new(vec![3.0, 2.0, 1.0]);
/// program.add_constraint("pick two", vec![(0, 1.0), (1, 1.0), (2, 1.0)], Relation::Exactly, 2.0);
/// let solution = LpBackend::new().maximise(&program)?;
/// assert_eq!(solution.status, MipStatus::Optimal);
/// assert!(solution.values[0] > 0.5 && solution.values[1] > 0.5 && solution.values[2] < 0.5);
/// # Ok::<(), lineup_core::BackendError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LpBackend;

impl LpBackend {
    /// Construct the backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Name of the engine compiled into this build.
    #[must_use]
    pub const fn engine(&self) -> &'static str {
        ENGINE
    }
}

impl MipBackend for LpBackend {
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        if let Some(name) = violated_constant_row(program) {
            log::debug!("constraint {name} has no terms and cannot hold");
            return Ok(MipSolution::infeasible());
        }
        if program.variable_count() == 0 {
            return Ok(MipSolution::optimal(Vec::new()));
        }

        let mut vars = variables!();
        let indicators: Vec<Variable> = program
            .objective()
            .iter()
            .map(|_| vars.add(variable().binary()))
            .collect();

        let mut objective = Expression::with_capacity(indicators.len());
        for (&coefficient, &indicator) in program.objective().iter().zip(&indicators) {
            objective.add_mul(coefficient, indicator);
        }

        let constraints = program
            .constraints()
            .iter()
            .filter(|row| !row.terms.is_empty())
            .map(|row| to_constraint(row, &indicators))
            .collect::<Result<Vec<_>, _>>()?;

        log::trace!(
            "solving {} binaries under {} constraints with {ENGINE}",
            indicators.len(),
            constraints.len()
        );
        solve(vars, objective, constraints, &indicators)
    }
}

#[cfg(feature = "cbc")]
fn solve(
    vars: ProblemVariables,
    objective: Expression,
    constraints: Vec<Constraint>,
    indicators: &[Variable],
) -> Result<MipSolution, BackendError> {
    let mut model = vars.maximise(objective).using(good_lp::coin_cbc);
    // CBC reports progress on stdout unless silenced.
    model.set_parameter("log", "0");
    run(model, constraints, indicators)
}

#[cfg(not(feature = "cbc"))]
fn solve(
    vars: ProblemVariables,
    objective: Expression,
    constraints: Vec<Constraint>,
    indicators: &[Variable],
) -> Result<MipSolution, BackendError> {
    run(
        vars.maximise(objective).using(good_lp::microlp),
        constraints,
        indicators,
    )
}

fn run<M>(
    mut model: M,
    constraints: Vec<Constraint>,
    indicators: &[Variable],
) -> Result<MipSolution, BackendError>
where
    M: SolverModel<Error = ResolutionError>,
{
    for constraint in constraints {
        model = model.with(constraint);
    }
    match model.solve() {
        Ok(solution) => Ok(MipSolution::optimal(
            indicators.iter().map(|&indicator| solution.value(indicator)).collect(),
        )),
        Err(ResolutionError::Infeasible) => Ok(MipSolution::infeasible()),
        Err(err) => Err(BackendError::Fault {
            message: err.to_string(),
        }),
    }
}

fn to_constraint(
    row: &LinearConstraint,
    indicators: &[Variable],
) -> Result<Constraint, BackendError> {
    let mut lhs = Expression::with_capacity(row.terms.len());
    for &(index, coefficient) in &row.terms {
        let Some(&indicator) = indicators.get(index) else {
            return Err(BackendError::Fault {
                message: format!(
                    "constraint {} references variable {index} of {}",
                    row.name,
                    indicators.len()
                ),
            });
        };
        lhs.add_mul(coefficient, indicator);
    }
    Ok(match row.relation {
        Relation::AtMost => lhs.leq(row.rhs),
        Relation::Exactly => lhs.eq(row.rhs),
    })
}

/// First constraint without terms whose constant side already fails.
fn violated_constant_row(program: &BinaryProgram) -> Option<&str> {
    program
        .constraints()
        .iter()
        .find(|row| row.terms.is_empty() && !row.is_satisfied_by(&[], CONSTANT_TOLERANCE))
        .map(|row| row.name.as_str())
}
