//! The round engine: turn-taking, bid validation, challenge resolution.
//!
//! [`RoundEngine`] owns the game state and is its only mutator. Each call to
//! [`RoundEngine::advance_turn`] asks the current player's provider for an
//! action and applies it:
//!
//! ```text
//! AwaitingTurn --bid--------------------> AwaitingTurn (next player)
//! AwaitingTurn --challenge, no bid------> AwaitingTurn (same player again)
//! AwaitingTurn --challenge, bid---------> ResolvingChallenge
//! ResolvingChallenge --two or more left-> RoundReset --> AwaitingTurn
//! ResolvingChallenge --one left---------> GameOver
//! ```
//!
//! Resolution and reset happen inside a single call, so from outside the
//! engine is only ever awaiting a turn or finished (see [`Phase`]).

mod builder;
mod round;

use std::sync::Arc;
use thiserror::Error;

use crate::core::{PlayerId, MAX_PLAYERS};
use crate::decision::DecisionProvider;

pub use builder::RoundEngineBuilder;
pub use round::RoundEngine;

/// Fewest players a game can start with.
pub const MIN_PLAYERS: usize = 2;

/// A misconfigured game. Fatal: the engine is never built.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("a game needs at least {} players, got {}", MIN_PLAYERS, .0)]
    NotEnoughPlayers(usize),

    #[error("at most {} players are supported, got {}", MAX_PLAYERS, .0)]
    TooManyPlayers(usize),

    #[error("dice per player must be positive")]
    NoDice,

    #[error("player names must not be empty")]
    EmptyName,

    #[error("duplicate player name `{0}`")]
    DuplicateName(String),
}

/// Result of a single engine step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The game goes on.
    Continue,
    /// Only `winner` has dice left.
    GameOver { winner: PlayerId },
}

impl Progress {
    /// Has the game ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, Progress::GameOver { .. })
    }

    /// The winner, once the game has ended.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            Progress::GameOver { winner } => Some(*winner),
            Progress::Continue => None,
        }
    }
}

/// How a driven game finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PlayerId),
    /// The turn cap was reached first.
    TurnLimit,
}

/// Where the engine is between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingTurn,
    GameOver,
}

/// A player joining the game: a unique name and their decision provider.
#[derive(Clone)]
pub struct Seat {
    pub name: String,
    pub provider: Arc<dyn DecisionProvider>,
}

impl Seat {
    /// Seat a player with a provider the engine will own.
    pub fn new(name: impl Into<String>, provider: impl DecisionProvider + 'static) -> Self {
        Self::shared(name, Arc::new(provider))
    }

    /// Seat a player with a provider the caller keeps a handle to.
    pub fn shared(name: impl Into<String>, provider: Arc<dyn DecisionProvider>) -> Self {
        Self {
            name: name.into(),
            provider,
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Seat").field("name", &self.name).finish_non_exhaustive()
    }
}
