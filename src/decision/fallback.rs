//! Built-in fallback decisions.
//!
//! Used whenever a provider fails, times out, or replies with something
//! unparseable. Cheap, local, and always produces an action.

use std::sync::Mutex;

use super::{DecisionError, DecisionProvider, DecisionView};
use crate::core::{minimal_raise, Action, Bid, GameRng};

/// Simple heuristic player.
///
/// - No bid on the table: open with one or two dice on a face from 2 to 6.
/// - Otherwise challenge with probability `quantity / aggression_scale`,
///   capped at `max_challenge_probability`, and raise minimally if not.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackPolicy {
    /// Bid quantity at which challenging becomes certain (before the cap).
    pub aggression_scale: f64,

    /// Upper bound on the challenge probability.
    pub max_challenge_probability: f64,
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self {
            aggression_scale: 10.0,
            max_challenge_probability: 0.6,
        }
    }
}

impl FallbackPolicy {
    /// Chance of challenging `bid`.
    #[must_use]
    pub fn challenge_probability(&self, bid: &Bid) -> f64 {
        (f64::from(bid.quantity) / self.aggression_scale).min(self.max_challenge_probability)
    }

    /// Pick an action given the current bid.
    pub fn decide(&self, current_bid: Option<&Bid>, rng: &mut GameRng) -> Action {
        let Some(bid) = current_bid else {
            return Action::bid(rng.gen_range(1..=2), rng.gen_range(2..=6));
        };

        if rng.gen_bool(self.challenge_probability(bid)) {
            return Action::Challenge;
        }
        // Nothing outranks the top bid.
        minimal_raise(Some(bid))
            .map_or(Action::Challenge, |(quantity, face_value)| Action::bid(quantity, face_value))
    }
}

/// The fallback policy as a stand-alone seat, with its own RNG.
#[derive(Debug)]
pub struct FallbackProvider {
    policy: FallbackPolicy,
    rng: Mutex<GameRng>,
}

impl FallbackProvider {
    /// Create a provider with the default policy.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_policy(FallbackPolicy::default(), rng)
    }

    /// Create a provider with a custom policy.
    #[must_use]
    pub fn with_policy(policy: FallbackPolicy, rng: GameRng) -> Self {
        Self {
            policy,
            rng: Mutex::new(rng),
        }
    }
}

impl DecisionProvider for FallbackProvider {
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| DecisionError::Unavailable("fallback rng lock poisoned".into()))?;
        Ok(self.policy.decide(view.current_bid.as_ref(), &mut rng))
    }
}
