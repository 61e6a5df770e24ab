//! Backend-neutral description of a 0/1 maximisation problem.

use std::fmt;

/// Comparison between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `lhs <= rhs`.
    AtMost,
    /// `lhs == rhs`.
    Exactly,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AtMost => "<=",
            Self::Exactly => "==",
        })
    }
}

/// A named linear constraint over binary variables.
///
/// Terms reference variables by index; indices absent from `terms` carry a
/// zero coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Human-readable label used in logs and diagnostics.
    pub name: String,
    /// `(variable index, coefficient)` pairs.
    pub terms: Vec<(usize, f64)>,
    /// Relation between the weighted sum and `rhs`.
    pub relation: Relation,
    /// Right-hand side bound.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Sum of coefficients selected by `values`.
    ///
    /// Indices without a value count as zero.
    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(index, coefficient)| coefficient * values.get(index).copied().unwrap_or(0.0))
            .sum()
    }

    /// Whether `values` satisfy the constraint within `tolerance`.
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        let lhs = self.lhs(values);
        match self.relation {
            Relation::AtMost => lhs <= self.rhs + tolerance,
            Relation::Exactly => (lhs - self.rhs).abs() <= tolerance,
        }
    }
}

/// A maximisation problem over binary variables.
///
/// # Examples
/// ```
/// use lineup_core::{BinaryProgram, Relation};
///
/// let mut program = BinaryProgram::new(vec![3.0, 2.0, 1.0]);
/// program.add_constraint("pick two", vec![(0, 1.0), (1, 1.0), (2, 1.0)], Relation::Exactly, 2.0);
/// assert_eq!(program.variable_count(), 3);
/// assert_eq!(program.objective_value(&[1.0, 1.0, 0.0]), 5.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BinaryProgram {
    objective: Vec<f64>,
    constraints: Vec<LinearConstraint>,
}

impl BinaryProgram {
    /// Create a program with one variable per objective coefficient.
    pub const fn new(objective: Vec<f64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
        }
    }

    /// Append a constraint.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        terms: Vec<(usize, f64)>,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints.push(LinearConstraint {
            name: name.into(),
            terms,
            relation,
            rhs,
        });
    }

    /// Objective coefficients, one per variable.
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    /// Number of binary variables.
    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    /// Objective value of an assignment.
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(values)
            .map(|(coefficient, value)| coefficient * value)
            .sum()
    }

    /// Whether an assignment satisfies every constraint within `tolerance`.
    pub fn is_feasible(&self, values: &[f64], tolerance: f64) -> bool {
        self.constraints
            .iter()
            .all(|constraint| constraint.is_satisfied_by(values, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn knapsack() -> BinaryProgram {
        let mut program = BinaryProgram::new(vec![5.0, 4.0, 3.0]);
        program.add_constraint("weight", vec![(0, 4.0), (1, 3.0), (2, 2.0)], Relation::AtMost, 5.0);
        program
    }

    #[rstest]
    #[case(&[0.0, 1.0, 1.0], true)]
    #[case(&[1.0, 1.0, 0.0], false)]
    #[case(&[1.0, 0.0, 0.0], true)]
    fn checks_feasibility(#[case] values: &[f64], #[case] expected: bool) {
        assert_eq!(knapsack().is_feasible(values, 1e-9), expected);
    }

    #[rstest]
    fn equality_uses_tolerance() {
        let mut program = BinaryProgram::new(vec![1.0, 1.0]);
        program.add_constraint("one", vec![(0, 1.0), (1, 1.0)], Relation::Exactly, 1.0);
        assert!(program.is_feasible(&[0.999_999_9, 0.0], 1e-6));
        assert!(!program.is_feasible(&[1.0, 1.0], 1e-6));
    }

    #[rstest]
    fn missing_values_count_as_zero() {
        let program = knapsack();
        let constraint = program.constraints().first().expect("weight constraint");
        assert!((constraint.lhs(&[1.0]) - 4.0).abs() < f64::EPSILON);
    }
}
