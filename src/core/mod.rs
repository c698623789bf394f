//! Core game types: dice, players, bids, actions, history, state, RNG,
//! configuration.
//!
//! Everything here is independent of who makes decisions. The round engine
//! in [`crate::engine`] drives these types through a game.

pub mod action;
pub mod bid;
pub mod config;
pub mod die;
pub mod history;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use bid::{is_valid_bid, minimal_raise, Bid};
pub use config::EngineConfig;
pub use die::{dice_from_faces, Die, DieError, MAX_FACE, MIN_FACE, WILD_FACE};
pub use history::HistoryEntry;
pub use player::{Player, PlayerId, PlayerMap, MAX_PLAYERS};
pub use rng::GameRng;
pub use state::{GameState, PlayerTally, SeatSummary, Snapshot};
