//! Game events reported to observers.
//!
//! Events refer to players by [`PlayerId`]; the `Setup` event lists names in
//! seat order so observers can resolve them. No event reveals dice faces
//! except the challenge report, which is public once dice are counted.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Bid, PlayerId, PlayerTally, Snapshot};

/// Full account of a resolved challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeReport {
    /// The bid that was called.
    pub bid: Bid,

    pub challenger: PlayerId,

    /// Dice counting toward the bid's face, wilds included.
    pub actual: u32,

    /// Per-player breakdown of `actual`.
    pub tally: Vec<PlayerTally>,

    pub loser: PlayerId,
    pub winner: PlayerId,

    /// Dice the loser holds after paying.
    pub loser_dice_left: u32,
}

impl ChallengeReport {
    /// Did the count back the bid up?
    #[must_use]
    pub fn bid_was_true(&self) -> bool {
        self.actual >= self.bid.quantity
    }
}

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// Players seated and dice rolled.
    Setup { players: Vec<String>, total_dice: u32 },

    /// A turn is about to be played.
    TurnStarted { snapshot: Snapshot },

    /// A legal bid was accepted as made.
    BidPlaced { player: PlayerId, bid: Bid },

    /// An illegal bid was replaced by the smallest legal raise.
    BidCorrected {
        player: PlayerId,
        requested_quantity: u32,
        requested_face: u32,
        placed: Bid,
    },

    /// A challenge with no bid on the table was ignored; the same player
    /// moves again.
    ChallengeRejected { player: PlayerId },

    /// A player called the current bid.
    ChallengeIssued {
        challenger: PlayerId,
        bidder: PlayerId,
        bid: Bid,
    },

    /// Dice were counted and a die changed hands.
    ChallengeResolved { report: ChallengeReport },

    /// A player lost their last die.
    PlayerEliminated { player: PlayerId },

    /// Fresh dice for everyone left.
    RoundStarted {
        round: u32,
        starter: PlayerId,
        total_dice: u32,
    },

    /// A provider failed; the fallback policy moved instead.
    DecisionFailed {
        player: PlayerId,
        error: String,
        fallback: Action,
    },

    /// One player remains.
    GameOver { winner: PlayerId },
}
