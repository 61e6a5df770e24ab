//! Optimisation requests and their validation.
//!
//! [`OptimizeRequest`] is what the optimiser consumes. With the `serde`
//! feature, [`OptimizePayload`] decodes the wire formats accepted at the
//! boundary and converts them into a request.

use std::collections::HashSet;

use thiserror::Error;

use crate::{MAX_PRICE, Player, PlayerId, Price};

/// Budget applied when the caller does not supply one.
pub const DEFAULT_BUDGET: Price = 150_000_000;

/// Number of rosters requested when the caller does not say.
pub const DEFAULT_COUNT: usize = 5;

/// Input to [`crate::TeamOptimizer::optimize`].
///
/// # Examples
/// ```
/// use lineup_core::{OptimizeRequest, DEFAULT_BUDGET, DEFAULT_COUNT};
///
/// let request = OptimizeRequest::new(Vec::new());
/// assert_eq!(request.budget, DEFAULT_BUDGET);
/// assert_eq!(request.count, DEFAULT_COUNT);
/// assert!(request.with_count(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeRequest {
    /// Pool of selectable players.
    pub players: Vec<Player>,
    /// Budget ceiling for each roster.
    pub budget: Price,
    /// Maximum number of rosters to return.
    pub count: usize,
}

/// Reasons a request is rejected before any solve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestValidationError {
    /// Zero rosters were requested.
    #[error("roster count must be positive")]
    ZeroCount,
    /// The budget exceeds [`MAX_PRICE`].
    #[error("budget {budget} exceeds the supported maximum of {MAX_PRICE}")]
    BudgetOutOfRange {
        /// The rejected budget.
        budget: Price,
    },
    /// Two players share an identifier.
    #[error("player id {id} appears more than once")]
    DuplicatePlayerId {
        /// The repeated identifier.
        id: PlayerId,
    },
}

impl OptimizeRequest {
    /// Request with the default budget and count.
    pub const fn new(players: Vec<Player>) -> Self {
        Self {
            players,
            budget: DEFAULT_BUDGET,
            count: DEFAULT_COUNT,
        }
    }

    /// Replace the budget.
    #[must_use]
    pub const fn with_budget(mut self, budget: Price) -> Self {
        self.budget = budget;
        self
    }

    /// Replace the roster count.
    #[must_use]
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Check the request can be formulated.
    ///
    /// A zero budget is accepted: it simply admits no roster.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if self.count == 0 {
            return Err(RequestValidationError::ZeroCount);
        }
        if self.budget > MAX_PRICE {
            return Err(RequestValidationError::BudgetOutOfRange {
                budget: self.budget,
            });
        }
        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(&player.id) {
                return Err(RequestValidationError::DuplicatePlayerId {
                    id: player.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
pub use payload::{OptimizePayload, PayloadError};

#[cfg(feature = "serde")]
mod payload {
    use serde::Deserialize;
    use serde_json::Value;
    use thiserror::Error;

    use super::{DEFAULT_BUDGET, DEFAULT_COUNT, OptimizeRequest};
    use crate::player::whole_units;
    use crate::{Player, PlayerError, PlayerRecord, Price};

    /// Decoded request payload.
    ///
    /// Two shapes are accepted: a bare array of player records, or an object
    /// with a `players` array and optional `budget` and `count` fields.
    ///
    /// # Examples
    /// ```
    /// use lineup_core::OptimizePayload;
    /// use serde_json::json;
    ///
    /// # fn main() -> Result<(), lineup_core::PayloadError> {
    /// let payload = OptimizePayload::from_value(json!({
    ///     "players": [{"id": 1, "price": 4000000, "score": 50.0, "position": "Forward"}],
    ///     "budget": 90000000
    /// }))?;
    /// let request = payload.into_request()?;
    /// assert_eq!(request.budget, 90_000_000);
    /// assert_eq!(request.players.len(), 1);
    /// # Ok(())
    /// # }
    /// ```
    #[derive(Debug, Clone, PartialEq)]
    pub struct OptimizePayload {
        /// Raw player records.
        pub players: Vec<PlayerRecord>,
        /// Budget supplied in the payload, if any.
        pub budget: Option<serde_json::Number>,
        /// Roster count supplied in the payload, if any.
        pub count: Option<usize>,
    }

    /// Errors raised while decoding a payload.
    #[derive(Debug, Error)]
    pub enum PayloadError {
        /// The payload carried no players.
        #[error("No input data provided")]
        Empty,
        /// The top-level JSON value was neither an array nor an object.
        #[error("payload must be an array of players or an object, found {found}")]
        Shape {
            /// JSON type that was found.
            found: &'static str,
        },
        /// A field had the wrong type or was missing.
        #[error("malformed payload: {0}")]
        Decode(#[source] serde_json::Error),
        /// The budget was not a whole non-negative amount.
        #[error("budget {reason}")]
        InvalidBudget {
            /// What was wrong with the budget.
            reason: &'static str,
        },
        /// A player record failed validation.
        #[error("player record {index} is invalid: {source}")]
        InvalidPlayer {
            /// Zero-based position in the payload.
            index: usize,
            /// Validation failure.
            #[source]
            source: PlayerError,
        },
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct PayloadBody {
        #[serde(default)]
        players: Vec<PlayerRecord>,
        #[serde(default)]
        budget: Option<serde_json::Number>,
        #[serde(default)]
        count: Option<usize>,
    }

    impl OptimizePayload {
        /// Decode either accepted payload shape.
        ///
        /// A payload without any player, such as `[]` or `{}`, is rejected as
        /// [`PayloadError::Empty`].
        pub fn from_value(value: Value) -> Result<Self, PayloadError> {
            let payload = Self::decode(value)?;
            if payload.players.is_empty() {
                return Err(PayloadError::Empty);
            }
            Ok(payload)
        }

        fn decode(value: Value) -> Result<Self, PayloadError> {
            match value {
                Value::Array(_) => {
                    let players = serde_json::from_value(value).map_err(PayloadError::Decode)?;
                    Ok(Self {
                        players,
                        budget: None,
                        count: None,
                    })
                }
                Value::Object(_) => {
                    let body: PayloadBody =
                        serde_json::from_value(value).map_err(PayloadError::Decode)?;
                    Ok(Self {
                        players: body.players,
                        budget: body.budget,
                        count: body.count,
                    })
                }
                other => Err(PayloadError::Shape {
                    found: json_type(&other),
                }),
            }
        }

        /// Validate the records and apply defaults for missing fields.
        pub fn into_request(self) -> Result<OptimizeRequest, PayloadError> {
            let budget: Price = match self.budget {
                Some(number) => whole_units(&number).map_err(|issue| {
                    PayloadError::InvalidBudget {
                        reason: issue.describe(),
                    }
                })?,
                None => DEFAULT_BUDGET,
            };
            let players = self
                .players
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    Player::try_from(record)
                        .map_err(|source| PayloadError::InvalidPlayer { index, source })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(OptimizeRequest {
                players,
                budget,
                count: self.count.unwrap_or(DEFAULT_COUNT),
            })
        }
    }

    const fn json_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}
