//! Bids and the bid ordering rule.
//!
//! Bids are ordered by quantity first and face value second, both
//! ascending: `2 fives < 2 sixes < 3 ones < 3 twos < ... < 4 sixes`.
//! A new bid must be strictly higher than the current one.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::die::{is_face, MAX_FACE};
use super::player::PlayerId;

/// Face value a raise falls back to after a bid on the highest face.
pub const RAISE_RESTART_FACE: u32 = 2;

/// An accepted bid: "at least `quantity` dice show `face_value` or are wild".
///
/// Immutable once made. The next bid supersedes it wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bid {
    /// Claimed number of dice.
    pub quantity: u32,

    /// Claimed face, 1-6.
    pub face_value: u32,

    /// Who made the claim.
    pub bidder: PlayerId,
}

impl Bid {
    /// Create a bid.
    #[must_use]
    pub const fn new(quantity: u32, face_value: u32, bidder: PlayerId) -> Self {
        Self {
            quantity,
            face_value,
            bidder,
        }
    }

    /// Compare claims by quantity then face, ignoring the bidder.
    #[must_use]
    pub fn rank_cmp(&self, other: &Bid) -> Ordering {
        (self.quantity, self.face_value).cmp(&(other.quantity, other.face_value))
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} dice show {}", self.quantity, self.face_value)
    }
}

/// Is a claim of `quantity` × `face_value` a legal next bid?
///
/// With no current bid any positive quantity on a real face is legal.
/// Otherwise the claim must raise the quantity, or keep it and raise the
/// face. A face outside 1-6 is never legal, even alongside a higher
/// quantity: a bid always names a face a die can show.
///
/// ```
/// use liars_dice::core::{is_valid_bid, Bid, PlayerId};
///
/// let current = Bid::new(2, 6, PlayerId::new(0));
/// assert!(is_valid_bid(3, 2, Some(&current)));
/// assert!(!is_valid_bid(2, 3, Some(&current)));
/// assert!(is_valid_bid(1, 5, None));
/// ```
#[must_use]
pub fn is_valid_bid(quantity: u32, face_value: u32, current: Option<&Bid>) -> bool {
    if quantity == 0 || !is_face(face_value) {
        return false;
    }

    match current {
        None => true,
        Some(bid) => {
            quantity > bid.quantity || (quantity == bid.quantity && face_value > bid.face_value)
        }
    }
}

/// The smallest legal raise over `current`, as `(quantity, face_value)`.
///
/// - no bid: one two
/// - face below six: same quantity, next face
/// - face six: one more die, face two
///
/// The result is not capped at the number of dice in play. `None` when
/// `current` is already the highest bid a `u32` can express; the only way
/// past it is a challenge.
#[must_use]
pub fn minimal_raise(current: Option<&Bid>) -> Option<(u32, u32)> {
    match current {
        None => Some((1, RAISE_RESTART_FACE)),
        Some(bid) if bid.face_value < MAX_FACE => Some((bid.quantity, bid.face_value + 1)),
        Some(bid) => bid
            .quantity
            .checked_add(1)
            .map(|quantity| (quantity, RAISE_RESTART_FACE)),
    }
}
