//! Scripted decisions for tests and replays.

use std::collections::VecDeque;
use std::sync::Mutex;

use super::{DecisionError, DecisionProvider, DecisionView};
use crate::core::Action;

/// Plays a fixed sequence of actions, one per call.
///
/// Every view it is shown is kept, so tests can check what the engine
/// revealed. Once the script runs out each call fails with
/// [`DecisionError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Action>>,
    seen: Mutex<Vec<DecisionView>>,
}

impl ScriptedProvider {
    /// Create a provider that plays `actions` in order.
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            script: Mutex::new(actions.into_iter().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }

    /// Views shown to this provider so far.
    #[must_use]
    pub fn views(&self) -> Vec<DecisionView> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl DecisionProvider for ScriptedProvider {
    fn decide(&self, view: &DecisionView) -> Result<Action, DecisionError> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(view.clone());
        }

        self.script
            .lock()
            .map_err(|_| DecisionError::Unavailable("script lock poisoned".into()))?
            .pop_front()
            .ok_or_else(|| DecisionError::Unavailable("script exhausted".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn view() -> DecisionView {
        DecisionView {
            player: PlayerId::new(0),
            player_name: "Ann".into(),
            own_dice: vec![],
            total_dice: 2,
            current_bid: None,
            history: vec![],
            round: 1,
        }
    }

    #[test]
    fn test_plays_in_order_then_fails() {
        let provider = ScriptedProvider::new([Action::bid(1, 3), Action::Challenge]);

        assert_eq!(provider.decide(&view()).unwrap(), Action::bid(1, 3));
        assert_eq!(provider.remaining(), 1);
        assert_eq!(provider.decide(&view()).unwrap(), Action::Challenge);
        assert!(matches!(
            provider.decide(&view()),
            Err(DecisionError::Unavailable(_))
        ));
        assert_eq!(provider.views().len(), 3);
    }
}
