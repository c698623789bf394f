//! # liars-dice
//!
//! A round engine for Liar's Dice with pluggable decision providers.
//!
//! ## Design Principles
//!
//! 1. **N-Player First**: Any number of players from 2 to 255. Players are
//!    addressed by a stable `PlayerId`; elimination never renumbers seats.
//!
//! 2. **Provider-Agnostic**: The engine asks a `DecisionProvider` per seat
//!    for each move and never cares whether it is scripted, a person at a
//!    terminal or a language model.
//!
//! 3. **Always Progresses**: Illegal bids are auto-corrected to the smallest
//!    legal raise and failing providers are replaced by a local fallback
//!    policy, so a game only ever ends with a winner.
//!
//! ## Rules
//!
//! Each player holds hidden dice. Players take turns either raising the
//! current bid ("at least `q` dice across the table show `f`") or
//! challenging it. Ones are wild. On a challenge the dice are counted; if the
//! bid holds the challenger loses a die, otherwise the bidder does. Everyone
//! rerolls and the challenge winner opens the next round. The last player
//! with dice wins.
//!
//! ## Modules
//!
//! - `core`: Dice, players, bids, actions, history, state, RNG, configuration
//! - `decision`: Decision providers, reply parsing, prompts, fallback policy
//! - `engine`: The round engine and its builder
//! - `observer`: Game events and listeners

pub mod core;
pub mod decision;
pub mod engine;
pub mod observer;

// Re-export commonly used types
pub use crate::core::{
    Action, Bid, Die, EngineConfig, GameRng, GameState, HistoryEntry, PlayerId, PlayerMap,
};

pub use crate::decision::{
    DecisionError, DecisionProvider, DecisionView, FallbackPolicy, FallbackProvider,
    ScriptedProvider,
};

pub use crate::engine::{GameOutcome, Progress, RoundEngine, RoundEngineBuilder, Seat, SetupError};

pub use crate::observer::{GameEvent, NullObserver, Observer, RecordingObserver, TracingObserver};
