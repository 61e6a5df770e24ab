//! Deterministic backends and player builders used by unit and behaviour
//! tests.
//!
//! [`EnumeratingBackend`] solves small programs exactly by visiting every
//! assignment, which makes it a reference for real solver backends.

use std::sync::{Mutex, PoisonError};

use crate::{BackendError, BinaryProgram, MipBackend, MipSolution, Player, PlayerId, Position, Price};

/// Feasibility tolerance used when checking enumerated assignments.
const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// Exact backend that enumerates every 0/1 assignment.
///
/// Ties are broken in favour of the assignment visited first, i.e. the one
/// with the smallest bit pattern where variable `i` is bit `i`.
#[derive(Debug, Clone, Copy)]
pub struct EnumeratingBackend {
    max_variables: usize,
}

impl EnumeratingBackend {
    /// Largest program enumerated by default.
    pub const DEFAULT_MAX_VARIABLES: usize = 20;

    /// Create a backend accepting at most `max_variables` variables.
    ///
    /// Values above 63 are clamped.
    pub fn with_max_variables(max_variables: usize) -> Self {
        Self {
            max_variables: max_variables.min(63),
        }
    }
}

impl Default for EnumeratingBackend {
    fn default() -> Self {
        Self::with_max_variables(Self::DEFAULT_MAX_VARIABLES)
    }
}

impl MipBackend for EnumeratingBackend {
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        let variables = program.variable_count();
        if variables > self.max_variables {
            return Err(BackendError::TooLarge {
                variables,
                limit: self.max_variables,
            });
        }

        let mut best: Option<(f64, Vec<f64>)> = None;
        let mut values = vec![0.0; variables];
        for mask in 0..(1_u64 << variables) {
            for (bit, value) in values.iter_mut().enumerate() {
                *value = if mask >> bit & 1 == 1 { 1.0 } else { 0.0 };
            }
            if !program.is_feasible(&values, FEASIBILITY_TOLERANCE) {
                continue;
            }
            let objective = program.objective_value(&values);
            if best.as_ref().is_none_or(|(incumbent, _)| objective > *incumbent) {
                best = Some((objective, values.clone()));
            }
        }

        Ok(best.map_or_else(MipSolution::infeasible, |(_, assignment)| {
            MipSolution::optimal(assignment)
        }))
    }
}

/// Backend returning the same answer for every program.
#[derive(Debug, Clone)]
pub struct FixedBackend {
    answer: Result<MipSolution, BackendError>,
}

impl FixedBackend {
    /// Always return `solution`.
    pub const fn new(solution: MipSolution) -> Self {
        Self {
            answer: Ok(solution),
        }
    }

    /// Always fail with [`BackendError::Fault`].
    pub fn failing(message: &str) -> Self {
        Self {
            answer: Err(BackendError::Fault {
                message: message.to_owned(),
            }),
        }
    }
}

impl MipBackend for FixedBackend {
    fn maximise(&self, _program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        self.answer.clone()
    }
}

/// Backend wrapper recording every program it receives.
#[derive(Debug, Default)]
pub struct RecordingBackend<B> {
    inner: B,
    programs: Mutex<Vec<BinaryProgram>>,
}

impl<B> RecordingBackend<B> {
    /// Wrap `inner`.
    pub const fn new(inner: B) -> Self {
        Self {
            inner,
            programs: Mutex::new(Vec::new()),
        }
    }

    /// Programs received so far, in call order.
    pub fn programs(&self) -> Vec<BinaryProgram> {
        self.programs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<B: MipBackend> MipBackend for RecordingBackend<B> {
    fn maximise(&self, program: &BinaryProgram) -> Result<MipSolution, BackendError> {
        self.programs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(program.clone());
        self.inner.maximise(program)
    }
}

/// Build a player without validation.
///
/// Intended for fixtures with known-good values.
pub fn player(id: impl Into<PlayerId>, position: Position, price: Price, score: f64) -> Player {
    Player {
        id: id.into(),
        price,
        score,
        position,
    }
}

/// Build an exact 1-4-3-3 formation with consecutive identifiers.
///
/// Identifiers start at `first_id`; every player shares `price` and `score`.
pub fn formation(first_id: i64, price: Price, score: f64) -> Vec<Player> {
    Position::ALL
        .into_iter()
        .flat_map(|position| std::iter::repeat_n(position, position.quota()))
        .zip(first_id..)
        .map(|(position, id)| player(id, position, price, score))
        .collect()
}

/// A 15-player pool: 1 goalkeeper, 5 defenders, 5 midfielders, 4 forwards.
///
/// Scores are distinct and every player costs 10, so any formation fits a
/// budget of 110. Identifiers run from 1 to 15 in the order listed.
pub fn fifteen_player_pool() -> Vec<Player> {
    vec![
        player(1, Position::Goalkeeper, 10, 6.0),
        player(2, Position::Defence, 10, 9.0),
        player(3, Position::Defence, 10, 8.0),
        player(4, Position::Defence, 10, 7.5),
        player(5, Position::Defence, 10, 7.0),
        player(6, Position::Defence, 10, 4.0),
        player(7, Position::Midfield, 10, 12.0),
        player(8, Position::Midfield, 10, 11.0),
        player(9, Position::Midfield, 10, 10.5),
        player(10, Position::Midfield, 10, 6.5),
        player(11, Position::Midfield, 10, 3.0),
        player(12, Position::Forward, 10, 14.0),
        player(13, Position::Forward, 10, 13.0),
        player(14, Position::Forward, 10, 12.5),
        player(15, Position::Forward, 10, 5.0),
    ]
}
