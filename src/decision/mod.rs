//! Decision providers: whoever or whatever picks each player's move.
//!
//! The engine asks one [`DecisionProvider`] per seat for an [`Action`] and
//! never looks at what kind of provider it is. Implementations here:
//!
//! - [`ScriptedProvider`]: replays a fixed list of actions (tests, replays)
//! - [`TextProvider`]: prompts a free-text [`Responder`] (e.g. a language
//!   model) and parses its reply
//! - [`LineProvider`]: reads the same reply grammar from any line-based input
//! - [`FallbackProvider`]: the built-in [`FallbackPolicy`] as a seat of its own
//!
//! A provider may fail for any reason. The engine recovers by asking the
//! fallback policy instead, so a failure never stalls the game.

pub mod fallback;
pub mod line;
pub mod parse;
pub mod prompt;
pub mod scripted;
pub mod text;
pub mod timeout;

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::core::{Action, Bid, Die, HistoryEntry, PlayerId};

pub use fallback::{FallbackPolicy, FallbackProvider};
pub use line::LineProvider;
pub use parse::{parse_decision, ParseError};
pub use scripted::ScriptedProvider;
pub use text::{Responder, TextProvider};
pub use timeout::{decide_guarded, decide_with_timeout};

/// Why a provider could not produce a decision.
#[derive(Debug, Error)]
pub enum DecisionError {
    #[error("decision timed out after {0:?}")]
    Timeout(Duration),

    #[error("could not parse decision: {0}")]
    Parse(#[from] ParseError),

    #[error("decision source unavailable: {0}")]
    Unavailable(String),

    #[error("decision provider stopped without answering")]
    Disconnected,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// What a player is allowed to see when deciding.
///
/// Only the deciding player's own dice are included.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionView {
    pub player: PlayerId,
    pub player_name: String,

    /// The deciding player's dice.
    pub own_dice: Vec<Die>,

    /// Dice in play across all active players.
    pub total_dice: u32,

    pub current_bid: Option<Bid>,

    /// Most recent history entries, oldest first.
    pub history: Vec<HistoryEntry>,

    pub round: u32,
}

/// A source of decisions for one seat.
///
/// Called synchronously, one seat at a time. Implementations that block
/// (network, user input) are bounded by the engine's decision timeout.
pub trait DecisionProvider: Send + Sync {
    /// Pick an action for the player described by `view`.
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError>;
}

impl<F> DecisionProvider for F
where
    F: Fn(&DecisionView) -> Result<Action, DecisionError> + Send + Sync,
{
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError> {
        self(view)
    }
}
