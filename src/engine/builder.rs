//! Fluent construction of a [`RoundEngine`].

use std::sync::Arc;
use std::time::Duration;

use super::{RoundEngine, Seat, SetupError};
use crate::core::EngineConfig;
use crate::decision::{DecisionProvider, FallbackPolicy};
use crate::observer::Observer;

/// Collects seats and settings, then sets the engine up.
///
/// ```
/// use liars_dice::core::Action;
/// use liars_dice::decision::ScriptedProvider;
/// use liars_dice::engine::RoundEngineBuilder;
/// use liars_dice::observer::NullObserver;
///
/// let engine = RoundEngineBuilder::new()
///     .seat("Ann", ScriptedProvider::new([Action::bid(1, 4)]))
///     .seat("Bo", ScriptedProvider::new([Action::Challenge]))
///     .dice_per_player(3)
///     .seed(7)
///     .build(NullObserver)
///     .unwrap();
///
/// assert_eq!(engine.state().total_dice(), 6);
/// ```
#[derive(Debug, Default)]
pub struct RoundEngineBuilder {
    seats: Vec<Seat>,
    config: EngineConfig,
    fallback: Option<FallbackPolicy>,
}

impl RoundEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a player. Seats are taken in the order they are added.
    pub fn seat(mut self, name: impl Into<String>, provider: impl DecisionProvider + 'static) -> Self {
        self.seats.push(Seat::new(name, provider));
        self
    }

    /// Add a player whose provider the caller keeps a handle to.
    pub fn shared_seat(mut self, name: impl Into<String>, provider: Arc<dyn DecisionProvider>) -> Self {
        self.seats.push(Seat::shared(name, provider));
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dice_per_player(mut self, dice: u32) -> Self {
        self.config.dice_per_player = dice;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn history_window(mut self, window: usize) -> Self {
        self.config.history_window = window;
        self
    }

    /// Bound each provider call (`None` calls providers inline).
    pub fn decision_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.decision_timeout = timeout;
        self
    }

    pub fn fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = Some(policy);
        self
    }

    /// Validate and set the engine up, reporting to `observer`.
    pub fn build<O: Observer>(self, observer: O) -> Result<RoundEngine<O>, SetupError> {
        let engine = RoundEngine::setup(self.seats, self.config, observer)?;
        Ok(match self.fallback {
            Some(policy) => engine.with_fallback_policy(policy),
            None => engine,
        })
    }
}
