//! Player actions.
//!
//! On each turn a player either raises the bid or challenges it. The
//! engine does not care who or what chose the action.

use serde::{Deserialize, Serialize};

/// A player's move.
///
/// A `Bid` carries the raw claim as the player made it; the engine decides
/// whether it is legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Claim at least `quantity` dice show `face_value`.
    Bid { quantity: u32, face_value: u32 },
    /// Call the current bid a lie.
    Challenge,
}

impl Action {
    /// Shorthand for a bid action.
    #[must_use]
    pub const fn bid(quantity: u32, face_value: u32) -> Self {
        Action::Bid {
            quantity,
            face_value,
        }
    }

    /// Is this a challenge?
    #[must_use]
    pub const fn is_challenge(&self) -> bool {
        matches!(self, Action::Challenge)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bid {
                quantity,
                face_value,
            } => write!(f, "BID {quantity} {face_value}"),
            Action::Challenge => write!(f, "CHALLENGE"),
        }
    }
}
