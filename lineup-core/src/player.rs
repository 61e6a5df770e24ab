//! Players available for selection.
//!
//! A [`Player`] is immutable input owned by the caller; the solver only reads
//! it. Wire payloads arrive as [`PlayerRecord`] values and are validated into
//! players through `TryFrom`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Price in whole currency units.
///
/// Prices and budgets reach the solver as `f64` coefficients, so both are
/// limited to [`MAX_PRICE`].
pub type Price = u64;

/// Largest accepted price or budget.
///
/// Every integer up to 2^53 converts to `f64` exactly.
pub const MAX_PRICE: Price = 1 << 53;

/// Stable identifier of a player.
///
/// Source data uses either integers or strings, so both are accepted on the
/// wire.
///
/// # Examples
/// ```
/// use lineup_core::PlayerId;
///
/// assert_eq!(PlayerId::from(7).to_string(), "7");
/// assert_eq!(PlayerId::from("salah").to_string(), "salah");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PlayerId {
    /// Integer identifier.
    Numeric(i64),
    /// Free-form textual identifier.
    Text(String),
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for PlayerId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<i32> for PlayerId {
    fn from(id: i32) -> Self {
        Self::Numeric(i64::from(id))
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Position category a player is listed under.
///
/// Every roster fills each category with a fixed quota, see
/// [`Position::quota`].
///
/// # Examples
/// ```
/// use lineup_core::Position;
///
/// let total: usize = Position::ALL.iter().map(|p| p.quota()).sum();
/// assert_eq!(total, 11);
/// assert_eq!("goal keeper".parse::<Position>(), Ok(Position::Goalkeeper));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Position {
    /// Goalkeeper.
    #[cfg_attr(feature = "serde", serde(rename = "Goal Keeper"))]
    Goalkeeper,
    /// Defender.
    Defence,
    /// Midfielder.
    Midfield,
    /// Forward.
    Forward,
}

impl Position {
    /// All categories in formation order.
    pub const ALL: [Self; 4] = [Self::Goalkeeper, Self::Defence, Self::Midfield, Self::Forward];

    /// Number of players of this category in every roster.
    pub const fn quota(self) -> usize {
        match self {
            Self::Goalkeeper => 1,
            Self::Defence => 4,
            Self::Midfield | Self::Forward => 3,
        }
    }

    /// Label used by source data.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goalkeeper => "Goal Keeper",
            Self::Defence => "Defence",
            Self::Midfield => "Midfield",
            Self::Forward => "Forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a position label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position '{label}'")]
pub struct ParsePositionError {
    /// The rejected label.
    pub label: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "goal keeper" | "goalkeeper" | "gk" => Ok(Self::Goalkeeper),
            "defence" | "defense" | "def" => Ok(Self::Defence),
            "midfield" | "mid" => Ok(Self::Midfield),
            "forward" | "fwd" => Ok(Self::Forward),
            _ => Err(ParsePositionError {
                label: s.to_owned(),
            }),
        }
    }
}

/// A selectable player.
///
/// # Examples
/// ```
/// use lineup_core::{Player, Position};
///
/// # fn main() -> Result<(), lineup_core::PlayerError> {
/// let player = Player::new(10, 7_500_000, 88.5, Position::Forward)?;
/// assert_eq!(player.price, 7_500_000);
/// assert!(Player::new(11, 1, -1.0, Position::Forward).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
    /// Unique identifier within a pool.
    pub id: PlayerId,
    /// Purchase price in whole currency units.
    pub price: Price,
    /// Merit metric maximised by the solver.
    pub score: f64,
    /// Position category.
    pub position: Position,
}

/// Errors returned when validating a player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The price was below zero.
    #[error("player {id} has a negative price")]
    NegativePrice {
        /// Offending player.
        id: PlayerId,
    },
    /// The price was not a whole number of currency units.
    #[error("player {id} has a fractional price")]
    FractionalPrice {
        /// Offending player.
        id: PlayerId,
    },
    /// The price does not fit the supported range.
    #[error("player {id} has a price outside the supported range")]
    PriceOutOfRange {
        /// Offending player.
        id: PlayerId,
    },
    /// The score was below zero.
    #[error("player {id} has a negative score")]
    NegativeScore {
        /// Offending player.
        id: PlayerId,
    },
    /// The score was NaN or infinite.
    #[error("player {id} has a non-finite score")]
    NonFiniteScore {
        /// Offending player.
        id: PlayerId,
    },
    /// The position label was not recognised.
    #[error("player {id}: {source}")]
    UnknownPosition {
        /// Offending player.
        id: PlayerId,
        /// Parse failure for the label.
        #[source]
        source: ParsePositionError,
    },
}

impl Player {
    /// Validates and constructs a [`Player`].
    pub fn new(
        id: impl Into<PlayerId>,
        price: Price,
        score: f64,
        position: Position,
    ) -> Result<Self, PlayerError> {
        let id = id.into();
        if price > MAX_PRICE {
            return Err(PlayerError::PriceOutOfRange { id });
        }
        if !score.is_finite() {
            return Err(PlayerError::NonFiniteScore { id });
        }
        if score < 0.0 {
            return Err(PlayerError::NegativeScore { id });
        }
        Ok(Self {
            id,
            price,
            score,
            position,
        })
    }
}

/// Wire form of a player, as found in request payloads.
///
/// Numbers are kept raw so validation can report negative or fractional
/// prices precisely instead of failing inside the deserialiser.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    /// Player identifier.
    pub id: PlayerId,
    /// Price as supplied by the caller.
    pub price: serde_json::Number,
    /// Score as supplied by the caller.
    pub score: f64,
    /// Position label as supplied by the caller.
    pub position: String,
}

#[cfg(feature = "serde")]
impl TryFrom<PlayerRecord> for Player {
    type Error = PlayerError;

    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        let PlayerRecord {
            id,
            price: raw_price,
            score,
            position: label,
        } = record;
        let position = match label.parse::<Position>() {
            Ok(parsed) => parsed,
            Err(source) => return Err(PlayerError::UnknownPosition { id, source }),
        };
        let price = match whole_units(&raw_price) {
            Ok(units) => units,
            Err(issue) => return Err(issue.into_error(id)),
        };
        Self::new(id, price, score, position)
    }
}

/// Why a JSON number is not a valid amount of whole currency units.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PriceIssue {
    Negative,
    Fractional,
    OutOfRange,
}

#[cfg(feature = "serde")]
impl PriceIssue {
    pub(crate) const fn describe(self) -> &'static str {
        match self {
            Self::Negative => "is negative",
            Self::Fractional => "is not a whole number",
            Self::OutOfRange => "is outside the supported range",
        }
    }

    fn into_error(self, id: PlayerId) -> PlayerError {
        match self {
            Self::Negative => PlayerError::NegativePrice { id },
            Self::Fractional => PlayerError::FractionalPrice { id },
            Self::OutOfRange => PlayerError::PriceOutOfRange { id },
        }
    }
}

#[cfg(feature = "serde")]
pub(crate) fn whole_units(number: &serde_json::Number) -> Result<Price, PriceIssue> {
    if let Some(price) = number.as_u64() {
        return if price > MAX_PRICE {
            Err(PriceIssue::OutOfRange)
        } else {
            Ok(price)
        };
    }
    if number.as_i64().is_some() {
        return Err(PriceIssue::Negative);
    }
    let Some(value) = number.as_f64() else {
        return Err(PriceIssue::OutOfRange);
    };
    if value < 0.0 {
        Err(PriceIssue::Negative)
    } else if value.fract() != 0.0 {
        Err(PriceIssue::Fractional)
    } else if value > MAX_PRICE as f64 {
        Err(PriceIssue::OutOfRange)
    } else {
        Ok(value as Price)
    }
}
