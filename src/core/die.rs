//! Six-sided dice.
//!
//! A `Die` can only hold a face in `1..=6`. Face 1 is wild: it counts toward
//! any face value when a bid is judged.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest face on a die.
pub const MIN_FACE: u32 = 1;

/// Highest face on a die.
pub const MAX_FACE: u32 = 6;

/// The wild face.
pub const WILD_FACE: u32 = 1;

/// A face value outside `1..=6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("die face {0} is outside 1..=6")]
pub struct DieError(pub u32);

/// A single die showing one face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die(u8);

impl Die {
    /// Create a die showing `face`.
    pub fn new(face: u32) -> Result<Self, DieError> {
        if is_face(face) {
            Ok(Self(face as u8))
        } else {
            Err(DieError(face))
        }
    }

    /// Wrap a face already known to be in `1..=6`.
    pub(crate) const fn from_valid_face(face: u32) -> Self {
        Self(face as u8)
    }

    /// The face this die shows.
    #[must_use]
    pub const fn face(self) -> u32 {
        self.0 as u32
    }

    /// Is this die showing the wild face?
    #[must_use]
    pub const fn is_wild(self) -> bool {
        self.0 as u32 == WILD_FACE
    }

    /// Does this die count toward a bid on `face`?
    ///
    /// True for a natural match or a wild. A wild counts once even when
    /// `face` is itself the wild face.
    #[must_use]
    pub const fn counts_for(self, face: u32) -> bool {
        self.face() == face || self.is_wild()
    }
}

impl TryFrom<u32> for Die {
    type Error = DieError;

    fn try_from(face: u32) -> Result<Self, Self::Error> {
        Self::new(face)
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> Self {
        die.face()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Is `face` a legal die face?
#[must_use]
pub const fn is_face(face: u32) -> bool {
    face >= MIN_FACE && face <= MAX_FACE
}

/// Build dice from raw faces, rejecting any face outside `1..=6`.
pub fn dice_from_faces(faces: &[u32]) -> Result<Vec<Die>, DieError> {
    faces.iter().map(|&face| Die::new(face)).collect()
}
