//! Feasible rosters produced by the solver.
//!
//! A [`Roster`] always holds [`ROSTER_SIZE`] players filling every
//! [`Position`] quota. Totals are derived once at construction.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::{Player, PlayerId, Position, Price};

/// Number of players in every roster.
pub const ROSTER_SIZE: usize = 11;

/// One feasible team selection.
///
/// # Examples
/// ```
/// use lineup_core::{Player, Position, Roster};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let formation = [
///     Position::Goalkeeper,
///     Position::Defence, Position::Defence, Position::Defence, Position::Defence,
///     Position::Midfield, Position::Midfield, Position::Midfield,
///     Position::Forward, Position::Forward, Position::Forward,
/// ];
/// let players = formation
///     .iter()
///     .zip(1_i64..)
///     .map(|(position, id)| Player::new(id, 10, 2.0, *position))
///     .collect::<Result<Vec<_>, _>>()?;
/// let roster = Roster::new(players)?;
/// assert_eq!(roster.total_price(), 110);
/// assert_eq!(roster.total_score(), 22.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Roster {
    players: Vec<Player>,
    total_price: Price,
    total_score: f64,
}

/// Errors returned by [`Roster::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The selection did not contain exactly [`ROSTER_SIZE`] players.
    #[error("roster must contain {ROSTER_SIZE} players, found {found}")]
    WrongSize {
        /// Number of players supplied.
        found: usize,
    },
    /// A position was over- or under-filled.
    #[error("roster needs {expected} {position} players, found {found}")]
    QuotaMismatch {
        /// Position whose quota failed.
        position: Position,
        /// Required count.
        expected: usize,
        /// Supplied count.
        found: usize,
    },
    /// The summed price does not fit in a [`Price`].
    #[error("roster price overflows")]
    PriceOverflow,
}

impl Roster {
    /// Validates the formation and derives the totals.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        if players.len() != ROSTER_SIZE {
            return Err(RosterError::WrongSize {
                found: players.len(),
            });
        }
        for position in Position::ALL {
            let found = players.iter().filter(|p| p.position == position).count();
            if found != position.quota() {
                return Err(RosterError::QuotaMismatch {
                    position,
                    expected: position.quota(),
                    found,
                });
            }
        }
        let total_price = players
            .iter()
            .try_fold(0, |sum: Price, p| sum.checked_add(p.price))
            .ok_or(RosterError::PriceOverflow)?;
        let total_score = players.iter().map(|p| p.score).sum();
        Ok(Self {
            players,
            total_price,
            total_score,
        })
    }

    /// Selected players, in pool order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Sum of member prices.
    pub const fn total_price(&self) -> Price {
        self.total_price
    }

    /// Sum of member scores.
    pub const fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Identifier set of the members.
    pub fn player_ids(&self) -> BTreeSet<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }
}
