//! Game history records.
//!
//! History is append-only and purely informational: decision providers and
//! observers read it, the rules never do. Each record renders as a short
//! sentence via `Display`.

use serde::{Deserialize, Serialize};

/// One recorded event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEntry {
    /// A legal bid, accepted as made.
    Bid {
        player: String,
        quantity: u32,
        face_value: u32,
    },

    /// An illegal bid replaced by the smallest legal raise.
    CorrectedBid {
        player: String,
        quantity: u32,
        face_value: u32,
    },

    /// A player called the current bid.
    Challenge { challenger: String, bidder: String },

    /// Who won the challenge.
    ChallengeResult {
        challenger: String,
        bidder: String,
        winner: String,
    },

    /// A player lost their last die.
    Eliminated { player: String },
}

impl HistoryEntry {
    /// Was this an engine substitution rather than a player's own bid?
    #[must_use]
    pub fn is_correction(&self) -> bool {
        matches!(self, HistoryEntry::CorrectedBid { .. })
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HistoryEntry::Bid {
                player,
                quantity,
                face_value,
            } => write!(f, "{player} bids {quantity} dice show {face_value}"),
            HistoryEntry::CorrectedBid {
                player,
                quantity,
                face_value,
            } => write!(
                f,
                "{player} bids {quantity} dice show {face_value} (auto-corrected)"
            ),
            HistoryEntry::Challenge { challenger, bidder } => {
                write!(f, "{challenger} challenges {bidder}'s bid")
            }
            HistoryEntry::ChallengeResult {
                challenger,
                bidder,
                winner,
            } => write!(f, "Challenge: {challenger} vs {bidder} - {winner} wins"),
            HistoryEntry::Eliminated { player } => write!(f, "{player} is eliminated"),
        }
    }
}
